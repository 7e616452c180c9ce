//! Display-refresh logic for the session clocks: a pure function from
//! (now, session timing, blink flag) to display strings, independent of the
//! loop that schedules it.

use crate::utils::time::{blink, format_clock, format_duration};
use chrono::{DateTime, Local, NaiveTime};

/// Remaining time below this threshold is highlighted as urgent.
const URGENT_SECS: i64 = 30 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStrings {
    /// Current wall-clock time.
    pub current: String,
    /// Time spent since session start.
    pub elapsed: String,
    /// Time left to the ideal workday end, clamped at zero.
    pub remaining: String,
    /// Countdown to the planned leave time, clamped at zero.
    pub countdown: String,
    /// True when the remaining time is exhausted or nearly so.
    pub urgent: bool,
}

/// Compute all clock strings for one refresh. `blink_on` selects the
/// alternate colon-less rendering; callers toggle it once per tick.
pub fn refresh(
    now: DateTime<Local>,
    started_at: DateTime<Local>,
    ideal_end: DateTime<Local>,
    leave_at: NaiveTime,
    blink_on: bool,
) -> DisplayStrings {
    let elapsed = now - started_at;
    let remaining = ideal_end - now;

    // The leave target is a time-of-day on the session's calendar day.
    let leave_dt = started_at
        .with_time(leave_at)
        .single()
        .unwrap_or(started_at);
    let countdown = leave_dt - now;

    let style = |s: String| if blink_on { blink(&s) } else { s };

    DisplayStrings {
        current: style(format_clock(now.time())),
        elapsed: style(format_duration(elapsed)),
        remaining: style(format_duration(remaining)),
        countdown: style(format_duration(countdown)),
        urgent: remaining.num_seconds() < URGENT_SECS,
    }
}
