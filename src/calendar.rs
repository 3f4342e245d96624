//! Calendar Helpers
//!
//! Weekday enumeration and conversion of wall-clock times on a calendar day
//! to epoch milliseconds in the local timezone.

use chrono::{Datelike, Duration, Local, NaiveDate, TimeZone, Weekday};

/// Epoch milliseconds of `day` at `hour:minute` local time.
///
/// On a DST gap the earlier valid mapping is used, matching how the tracking
/// app itself resolves wall-clock times.
pub fn local_ms(day: NaiveDate, hour: u32, minute: u32) -> i64 {
    let naive = day
        .and_hms_opt(hour, minute, 0)
        .expect("hour and minute are in range");
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// All Monday-Friday dates in `[start, end]`, in order.
pub fn weekdays_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(day);
        }
        day += Duration::days(1);
    }
    days
}

/// Weekdays from `n_weeks` ago through yesterday, inclusive.
pub fn past_weekdays(n_weeks: i64) -> Vec<NaiveDate> {
    let today = Local::now().date_naive();
    weekdays_between(today - Duration::weeks(n_weeks), today - Duration::days(1))
}
