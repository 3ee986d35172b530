use chrono::{DateTime, Datelike, Utc};

fn to_date_time(epoch_seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch_seconds, 0).unwrap_or_default()
}

/// e.g. "2025-04-01 05:00:00"
pub fn format_date_time(epoch_seconds: i64) -> String {
    to_date_time(epoch_seconds).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// e.g. "2025-04-01"
pub fn format_date(epoch_seconds: i64) -> String {
    to_date_time(epoch_seconds).format("%Y-%m-%d").to_string()
}

/// Whole years and months between two times, e.g. "1y 3mo", "11mo" or "<1mo".
/// Both times are truncated to the day and may be given in either order.
pub fn format_age(start_seconds: i64, end_seconds: i64) -> String {
    let (start, end) = if start_seconds <= end_seconds {
        (to_date_time(start_seconds), to_date_time(end_seconds))
    } else {
        (to_date_time(end_seconds), to_date_time(start_seconds))
    };

    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    if months < 0 {
        years -= 1;
        months += 12;
    }

    // Not quite a full month yet
    if end.day() < start.day() {
        if months == 0 {
            years -= 1;
            months = 11;
        } else {
            months -= 1;
        }
    }

    match (years, months) {
        (0, 0) => "<1mo".to_string(),
        (0, months) => format!("{months}mo"),
        (years, months) => format!("{years}y {months}mo")
    }
}
