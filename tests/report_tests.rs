use bikeshare::core::calculator::frequency::{FrequencyTable, mode_of};
use bikeshare::core::loader::load;
use bikeshare::core::logic::Core;
use bikeshare::core::pager::RowPager;
use bikeshare::core::reports::{
    Demographic, Timed, duration_report, station_report, time_of_travel_report, user_report,
};
use bikeshare::config::Config;
use bikeshare::data::CsvDirSource;
use bikeshare::errors::{AppError, DataError};
use bikeshare::models::city::City;
use bikeshare::models::dataset::{Dataset, DatasetSchema};
use bikeshare::models::filter::{DayFilter, FilterSpec, MonthFilter};
use bikeshare::ui::render::render_users;
use chrono::Weekday;

mod common;
use common::{fixtures_dir, trip, trips_at_hours};

fn load_city(city: City) -> Dataset {
    load(&CsvDirSource::new(fixtures_dir()), &FilterSpec::unfiltered(city)).unwrap()
}

// ---------------------------
// mode / frequency table
// ---------------------------

#[test]
fn test_mode_strict_majority() {
    let report = time_of_travel_report(&trips_at_hours(&[5, 5, 9, 9, 5])).unwrap();
    assert_eq!(report.most_common_hour.value, 5);
    assert_eq!(report.most_common_hour.count, 3);
}

#[test]
fn test_mode_tie_goes_to_first_seen() {
    let report = time_of_travel_report(&trips_at_hours(&[5, 5, 9, 9])).unwrap();
    assert_eq!(report.most_common_hour.value, 5);

    let report = time_of_travel_report(&trips_at_hours(&[9, 5, 5, 9])).unwrap();
    assert_eq!(report.most_common_hour.value, 9);
}

#[test]
fn test_frequency_table_ranked_is_stable() {
    let table: FrequencyTable<&str> = ["b", "a", "c", "a", "b", "d"].into_iter().collect();
    let ranked: Vec<(&str, usize)> = table.ranked().into_iter().map(|r| (r.value, r.count)).collect();

    assert_eq!(ranked, vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]);
    assert_eq!(table.count(&"a"), 2);
    assert_eq!(table.count(&"z"), 0);
}

#[test]
fn test_mode_of_empty_is_none() {
    assert!(mode_of(Vec::<u32>::new()).is_none());
}

// ---------------------------
// time of travel
// ---------------------------

#[test]
fn test_time_report_on_fixture() {
    let ds = load_city(City::Chicago);
    let report = time_of_travel_report(&ds.records).unwrap();

    assert_eq!(report.most_common_month.value, 6);
    assert_eq!(report.month_name(), "June");
    assert_eq!(report.most_common_weekday.value, Weekday::Mon);
    assert_eq!(report.weekday_name(), "Monday");
    assert_eq!(report.most_common_hour.value, 8);
    assert_eq!(report.most_common_hour.count, 5);
}

#[test]
fn test_reports_fail_on_empty_selection() {
    let empty = Dataset::new(City::Chicago, DatasetSchema::default(), Vec::new());

    assert!(time_of_travel_report(&empty.records).unwrap_err().is_empty_dataset());
    assert!(station_report(&empty.records).unwrap_err().is_empty_dataset());
    assert!(duration_report(&empty.records).unwrap_err().is_empty_dataset());
    assert!(user_report(&empty).unwrap_err().is_empty_dataset());
    assert!(
        Core::build_full_report(&FilterSpec::unfiltered(City::Chicago), &empty)
            .unwrap_err()
            .is_empty_dataset()
    );
}

// ---------------------------
// stations
// ---------------------------

#[test]
fn test_station_pairs_are_directional() {
    let records = vec![
        trip("2017-01-02 08:00:00", "A", "B", 60),
        trip("2017-01-02 09:00:00", "B", "A", 60),
        trip("2017-01-02 10:00:00", "B", "A", 60),
    ];
    let report = station_report(&records).unwrap();

    assert_eq!(report.most_common_pair.value, "B to A");
    assert_eq!(report.most_common_pair.count, 2);
    assert_eq!(report.most_common_start.value, "B");
    assert_eq!(report.most_common_end.value, "A");
}

#[test]
fn test_station_report_on_fixture() {
    let report = station_report(&load_city(City::Chicago).records).unwrap();

    assert_eq!(report.most_common_start.value, "Clark St & Elm St");
    assert_eq!(report.most_common_start.count, 6);
    assert_eq!(report.most_common_end.value, "State St & Harrison St");
    assert_eq!(
        report.most_common_pair.value,
        "Clark St & Elm St to State St & Harrison St"
    );
    assert_eq!(report.most_common_pair.count, 4);
}

// ---------------------------
// duration
// ---------------------------

#[test]
fn test_duration_total_and_mean() {
    let records = vec![
        trip("2017-01-02 08:00:00", "A", "B", 100),
        trip("2017-01-02 09:00:00", "A", "B", 200),
        trip("2017-01-02 10:00:00", "A", "B", 300),
    ];
    let report = duration_report(&records).unwrap();

    assert_eq!(report.total_duration, 600);
    assert_eq!(report.mean_duration, 200.0);
    assert_eq!(report.trips, 3);
}

#[test]
fn test_duration_total_overflow_is_an_error() {
    let records = vec![
        trip("2017-01-02 08:00:00", "A", "B", u64::MAX),
        trip("2017-01-02 09:00:00", "A", "B", 1),
    ];
    let err = duration_report(&records).unwrap_err();

    assert!(matches!(err, AppError::Data(DataError::DurationOverflow)));
}

#[test]
fn test_duration_report_on_filtered_fixture() {
    let filter = FilterSpec::new(City::Chicago, MonthFilter::Month(6), DayFilter::Day(Weekday::Mon));
    let ds = load(&CsvDirSource::new(fixtures_dir()), &filter).unwrap();
    let report = duration_report(&ds.records).unwrap();

    assert_eq!(report.total_duration, 1590);
    assert_eq!(report.mean_duration, 530.0);
}

// ---------------------------
// users
// ---------------------------

#[test]
fn test_user_report_with_demographics() {
    let report = user_report(&load_city(City::Chicago)).unwrap();

    let types: Vec<(&str, usize)> = report
        .user_types
        .iter()
        .map(|r| (r.value.as_str(), r.count))
        .collect();
    assert_eq!(types, vec![("Subscriber", 8), ("Customer", 4)]);

    let gender = report.gender.stats().expect("gender stats");
    assert_eq!(gender[0].value, "Male");
    assert_eq!(gender[0].count, 5);
    assert_eq!(gender[1].count, 4);

    let years = report.birth_year.stats().expect("birth year stats");
    assert_eq!(years.earliest, 1972);
    assert_eq!(years.most_recent, 1999);
    assert_eq!(years.most_common.value, 1985);
    assert_eq!(years.most_common.count, 4);
}

#[test]
fn test_user_report_without_gender_column_does_not_fail() {
    let report = user_report(&load_city(City::Washington)).unwrap();

    assert!(report.gender.is_unavailable());
    assert!(report.birth_year.is_unavailable());
    assert!(!report.has_demographics());
    assert_eq!(report.user_types[0].value, "Subscriber");
    assert_eq!(report.user_types[0].count, 4);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("gender").is_none());
    assert!(json.get("birth_year").is_none());
}

#[test]
fn test_user_report_column_present_but_no_values() {
    let records = vec![trip("2017-01-02 08:00:00", "A", "B", 60)];
    let schema = DatasetSchema {
        has_gender: true,
        has_birth_year: true,
    };
    let ds = Dataset::new(City::NewYorkCity, schema, records);
    let report = user_report(&ds).unwrap();

    assert_eq!(report.gender, Demographic::NoValues);
    assert_eq!(report.birth_year, Demographic::NoValues);
    assert!(report.has_demographics());
    assert!(report.user_types.is_empty());
}

// ---------------------------
// full report / paging
// ---------------------------

#[test]
fn test_full_report_json_shape() {
    let ds = load_city(City::NewYorkCity);
    let report = Core::build_full_report(&FilterSpec::unfiltered(City::NewYorkCity), &ds).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["city"], "new york city");
    assert_eq!(json["month"], "all");
    assert_eq!(json["trips"], 6);
    assert_eq!(json["trip_duration"]["total_duration"], 4842);
    assert_eq!(json["time_of_travel"]["most_common_weekday"]["value"], "Wednesday");
    assert!(json["users"]["gender"]["status"] == "stats");
    assert!(json["stations"]["elapsed_ms"].is_number());
}

#[test]
fn test_pager_walks_five_rows_at_a_time() {
    let rows: Vec<usize> = (0..12).collect();
    let mut pager = RowPager::new();

    assert_eq!(pager.next_page(&rows), Some(&rows[0..5]));
    assert_eq!(pager.next_page(&rows), Some(&rows[5..10]));
    assert_eq!(pager.next_page(&rows), Some(&rows[10..12]));
    assert_eq!(pager.next_page(&rows), None);
    assert_eq!(pager.next_page(&rows), None);
}

#[test]
fn test_pager_exact_multiple_and_empty() {
    let rows: Vec<usize> = (0..10).collect();
    let mut pager = RowPager::new();
    assert!(pager.next_page(&rows).is_some());
    assert!(pager.next_page(&rows).is_some());
    assert!(!pager.has_more(rows.len()));
    assert_eq!(pager.next_page(&rows), None);

    let empty: Vec<usize> = Vec::new();
    assert_eq!(RowPager::new().next_page(&empty), None);
    assert_eq!(RowPager::at_page(2).next_page(&rows), None);
    assert_eq!(RowPager::at_page(1).next_page(&rows), Some(&rows[5..10]));
}

// ---------------------------
// rendering
// ---------------------------

#[test]
fn test_ranked_counts_align_on_display_width() {
    let records = vec![
        trip("2017-01-02 08:00:00", "A", "B", 60).with_user_type(Some("Abonné".into())),
        trip("2017-01-02 09:00:00", "A", "B", 60).with_user_type(Some("Abonné".into())),
        trip("2017-01-02 10:00:00", "A", "B", 60).with_user_type(Some("Member".into())),
    ];
    let ds = Dataset::new(City::Washington, DatasetSchema::default(), records);
    let timed = Timed::measure(|| user_report(&ds)).unwrap();

    let out = render_users(&timed, "Washington", &Config::default());

    assert!(out.contains("  Abonné  2\n"));
    assert!(out.contains("  Member  1\n"));
}
