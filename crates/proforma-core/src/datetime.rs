//! Composed event date: `2025年9月22日（月） 15:00-19:00`.
//!
//! Derived from the five raw sub-fields (year, month, day, start, end). Any
//! missing or calendar-invalid input yields the empty string; callers treat
//! that as "no date yet", never as an error.

use chrono::{Datelike, NaiveDate};

/// Weekday labels indexed 0=Sunday .. 6=Saturday.
const WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Build the formatted date + weekday + time-range string.
///
/// Fail-soft: empty inputs, non-numeric year/month/day, or dates that do not
/// exist on the calendar (e.g. Feb 30) all return `""`. There is no rollover;
/// an invalid day is rejected, not slid into the next month.
pub fn compose_event_datetime(
    year: &str,
    month: &str,
    day: &str,
    time_start: &str,
    time_end: &str,
) -> String {
    if year.is_empty()
        || month.is_empty()
        || day.is_empty()
        || time_start.is_empty()
        || time_end.is_empty()
    {
        return String::new();
    }
    let (Ok(y), Ok(m), Ok(d)) = (
        year.trim().parse::<i32>(),
        month.trim().parse::<u32>(),
        day.trim().parse::<u32>(),
    ) else {
        return String::new();
    };
    let Some(date) = NaiveDate::from_ymd_opt(y, m, d) else {
        return String::new();
    };
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{y}年{m}月{d}日（{weekday}） {}-{}",
        clip_time(time_start),
        clip_time(time_end)
    )
}

/// Number of days in the given month; used to clamp the day picker.
/// Out-of-range months fall back to 31.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return 31,
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(n) => n.signed_duration_since(first).num_days() as u32,
        None => 31,
    }
}

// First five characters of an HH:MM[:SS...] string; tolerates shorter input.
fn clip_time(t: &str) -> String {
    t.chars().take(5).collect()
}
