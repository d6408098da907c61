//! Formatting utilities used for CLI and JSON outputs.

/// Horizontal rule made of `ch`, 40 columns wide.
pub fn rule(ch: &str) -> String {
    let ch = if ch.is_empty() { "-" } else { ch };
    ch.repeat(40)
}

/// Seconds → "3d 04h 05m 06s" (days omitted when zero).
pub fn secs2readable(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{}d {:02}h {:02}m {:02}s", days, hours, minutes, seconds)
    } else {
        format!("{:02}h {:02}m {:02}s", hours, minutes, seconds)
    }
}

/// Like [`secs2readable`] for a fractional mean, rounded to the second.
pub fn mean2readable(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "n/a".to_string();
    }
    secs2readable(secs.round() as u64)
}

/// Hour of day → "17:00".
pub fn format_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// "(1 trip)" / "(12 trips)"
pub fn trips_label(count: usize) -> String {
    if count == 1 {
        "(1 trip)".to_string()
    } else {
        format!("({} trips)", count)
    }
}
