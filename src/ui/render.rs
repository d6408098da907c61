//! Console rendering of reports and raw rows.

use crate::config::Config;
use crate::core::calculator::frequency::Ranked;
use crate::core::logic::FullReport;
use crate::core::reports::{
    Demographic, DurationReport, StationReport, TimeReport, Timed, UserReport,
};
use crate::models::trip::TripRecord;
use crate::utils::date::weekday_name;
use crate::utils::formatting::{format_hour, mean2readable, rule, secs2readable, trips_label};
use crate::utils::table::{Table, display_width, pad};
use ansi_term::Colour;
use std::fmt::Write;
use std::time::Duration;

fn section_open(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}\n", Colour::Cyan.bold().paint(title));
    let _ = writeln!(out, "{}", "*".repeat(40));
}

fn section_close(out: &mut String, elapsed: Duration, cfg: &Config) {
    let _ = writeln!(out, "{}", "*".repeat(40));
    if cfg.show_timing {
        let _ = writeln!(out, "\nThis took {:.6} seconds.", elapsed.as_secs_f64());
    }
    let _ = writeln!(out, "{}", rule(&cfg.separator_char));
}

fn ranked_list(out: &mut String, items: &[Ranked<String>]) {
    let width = items
        .iter()
        .map(|r| display_width(&r.value))
        .max()
        .unwrap_or(0);
    for item in items {
        let _ = writeln!(out, "  {}  {}", pad(&item.value, width), item.count);
    }
}

pub fn render_time(t: &Timed<TimeReport>, cfg: &Config) -> String {
    let r = &t.report;
    let mut out = String::new();
    section_open(&mut out, "Calculating The Most Frequent Times of Travel...");
    let _ = writeln!(
        out,
        "The most common month: {} {}",
        r.month_name(),
        trips_label(r.most_common_month.count)
    );
    let _ = writeln!(
        out,
        "The most common day: {} {}",
        r.weekday_name(),
        trips_label(r.most_common_weekday.count)
    );
    let _ = writeln!(
        out,
        "The most common start hour: {} {}",
        format_hour(r.most_common_hour.value),
        trips_label(r.most_common_hour.count)
    );
    section_close(&mut out, t.elapsed, cfg);
    out
}

pub fn render_stations(t: &Timed<StationReport>, cfg: &Config) -> String {
    let r = &t.report;
    let mut out = String::new();
    section_open(&mut out, "Calculating The Most Popular Stations and Trip...");
    let _ = writeln!(
        out,
        "The most common start station: {} {}",
        r.most_common_start.value,
        trips_label(r.most_common_start.count)
    );
    let _ = writeln!(
        out,
        "The most common end station: {} {}",
        r.most_common_end.value,
        trips_label(r.most_common_end.count)
    );
    let _ = writeln!(
        out,
        "The most common trip: {} {}",
        r.most_common_pair.value,
        trips_label(r.most_common_pair.count)
    );
    section_close(&mut out, t.elapsed, cfg);
    out
}

pub fn render_duration(t: &Timed<DurationReport>, cfg: &Config) -> String {
    let r = &t.report;
    let mut out = String::new();
    section_open(&mut out, "Calculating Trip Duration...");
    let _ = writeln!(
        out,
        "Total travel time: {} s ({})",
        r.total_duration,
        secs2readable(r.total_duration)
    );
    let _ = writeln!(
        out,
        "Mean travel time: {:.2} s ({})",
        r.mean_duration,
        mean2readable(r.mean_duration)
    );
    section_close(&mut out, t.elapsed, cfg);
    out
}

pub fn render_users(t: &Timed<UserReport>, city: &str, cfg: &Config) -> String {
    let r = &t.report;
    let mut out = String::new();
    section_open(&mut out, "Calculating User Stats...");

    let _ = writeln!(out, "User type counts:");
    if r.user_types.is_empty() {
        let _ = writeln!(out, "  (no user type recorded for this selection)");
    } else {
        ranked_list(&mut out, &r.user_types);
    }

    if !r.has_demographics() {
        let _ = writeln!(
            out,
            "This data set doesn't contain gender/year of birth information for {}",
            city
        );
    } else {
        match &r.gender {
            Demographic::Stats(counts) => {
                let _ = writeln!(out, "Gender counts:");
                ranked_list(&mut out, counts);
            }
            Demographic::NoValues => {
                let _ = writeln!(out, "Gender counts: no values in this selection");
            }
            Demographic::Unavailable => {
                let _ = writeln!(out, "Gender counts: unavailable for {}", city);
            }
        }

        match &r.birth_year {
            Demographic::Stats(b) => {
                let _ = writeln!(out, "Earliest birth: {}", b.earliest);
                let _ = writeln!(out, "Most recent birth: {}", b.most_recent);
                let _ = writeln!(
                    out,
                    "Most common birth: {} {}",
                    b.most_common.value,
                    trips_label(b.most_common.count)
                );
            }
            Demographic::NoValues => {
                let _ = writeln!(out, "Birth year: no values in this selection");
            }
            Demographic::Unavailable => {
                let _ = writeln!(out, "Birth year: unavailable for {}", city);
            }
        }
    }

    section_close(&mut out, t.elapsed, cfg);
    out
}

pub fn render_full_report(report: &FullReport, city_title: &str, cfg: &Config) -> String {
    let mut out = String::new();
    out.push_str(&render_time(&report.time_of_travel, cfg));
    out.push_str(&render_stations(&report.stations, cfg));
    out.push_str(&render_duration(&report.trip_duration, cfg));
    out.push_str(&render_users(&report.users, city_title, cfg));
    out
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Table of raw trips; `first_index` numbers the first row.
pub fn render_rows(rows: &[TripRecord], first_index: usize) -> String {
    let mut table = Table::with_headers(&[
        "#",
        "Start Time",
        "End Time",
        "Day",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
        "Gender",
        "Birth Year",
    ]);

    for (i, r) in rows.iter().enumerate() {
        table.add_row(vec![
            (first_index + i).to_string(),
            r.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            r.end_time
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            weekday_name(r.weekday).to_string(),
            r.duration_secs.to_string(),
            r.start_station.clone(),
            r.end_station.clone(),
            opt(&r.user_type),
            opt(&r.gender),
            r.birth_year.map(|y| y.to_string()).unwrap_or_default(),
        ]);
    }

    table.render()
}
