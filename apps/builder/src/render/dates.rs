//! Date-range formatting for entry headers.

/// Fixed month abbreviation table, indexed by (month - 1).
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats a "YYYY-MM" value as "{MonthAbbrev} {Year}".
///
/// Empty or unparsable input (missing month, month outside 1–12) formats
/// as the empty string; omission is the renderer's rule for everything
/// it cannot show.
pub fn format_month_year(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let Some((year, month)) = date.split_once('-') else {
        return String::new();
    };
    let Ok(month) = month.parse::<usize>() else {
        return String::new();
    };
    if !(1..=12).contains(&month) || year.is_empty() {
        return String::new();
    }
    format!("{} {}", MONTH_ABBREV[month - 1], year)
}

/// Formats an entry's date range.
///
/// No start date → empty string. A current position labels the end
/// "Present" regardless of any stored end date. With an end label the
/// output is "{start} - {end}"; otherwise "{start}" alone.
pub fn format_date_range(start_date: &str, end_date: &str, is_current: bool) -> String {
    let start = format_month_year(start_date);
    if start.is_empty() {
        return String::new();
    }
    let end = if is_current {
        "Present".to_string()
    } else {
        format_month_year(end_date)
    };
    if end.is_empty() {
        start
    } else {
        format!("{start} - {end}")
    }
}
