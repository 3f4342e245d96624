//! Session Generator
//!
//! Packs one to three work intervals into the 09:00-18:30 window of a given
//! day so their lengths sum to roughly a requested time budget. Purely
//! cosmetic realism for demo data, not a scheduler.

use chrono::NaiveDate;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use crate::calendar::local_ms;
use crate::model::Session;

/// Daily window start, 09:00 local time.
const WINDOW_START: (u32, u32) = (9, 0);
/// Daily window end, 18:30 local time.
const WINDOW_END: (u32, u32) = (18, 30);

const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_MINUTE: i64 = 60_000;

/// Slack kept between the latest possible start and the window end, so a
/// session rarely runs right up against 18:30.
const START_SLACK_MS: i64 = 30 * MS_PER_MINUTE;

/// The local-time working window of `day` as `(start_ms, end_ms)`.
pub fn day_window(day: NaiveDate) -> (i64, i64) {
    (
        local_ms(day, WINDOW_START.0, WINDOW_START.1),
        local_ms(day, WINDOW_END.0, WINDOW_END.1),
    )
}

/// Generate 1-3 sessions on `day` summing to approximately `total_hours`.
///
/// Every session satisfies `start < end` and lies inside the daily window.
/// Intervals are clamped to the window end; generation stops early once the
/// budget is spent or the cursor leaves the window.
pub fn generate_sessions<R: Rng>(rng: &mut R, day: NaiveDate, total_hours: f64) -> Vec<Session> {
    let total_ms = (total_hours * MS_PER_HOUR) as i64;
    let (day_start, day_end) = day_window(day);
    let latest_start = (day_end - total_ms - START_SLACK_MS).max(day_start);

    let mut cursor = rng.gen_range(day_start..=latest_start);
    let count = interval_count(rng);
    let mut remaining = total_ms;
    let mut sessions = Vec::with_capacity(count);

    for i in 0..count {
        let is_last = i == count - 1;
        let chunk = if is_last {
            remaining
        } else {
            (remaining as f64 * rng.gen_range(0.35..0.60)) as i64
        };
        let end = (cursor + chunk).min(day_end);
        if end <= cursor {
            break;
        }
        sessions.push(Session::new(cursor, end));
        remaining -= end - cursor;
        if remaining <= 0 {
            break;
        }
        // 5-25 minute break before the next interval
        cursor = end + rng.gen_range(5..=25) * MS_PER_MINUTE;
        if cursor >= day_end {
            break;
        }
    }

    sessions
}

/// Draw the interval count: mostly one or two blocks, occasionally three.
fn interval_count<R: Rng>(rng: &mut R) -> usize {
    const WEIGHTS: [u32; 3] = [45, 40, 15];
    let dist = WeightedIndex::new(WEIGHTS).expect("weights are non-empty and non-zero");
    dist.sample(rng) + 1
}
