//! Time utilities: fixed-width clock and duration formatting, entry timestamps.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local, NaiveTime};

/// Placeholder shown for clock fields that are not set yet (logout time,
/// hours worked).
pub const CLOCK_PLACEHOLDER: &str = "--:--:--";

/// Format a duration as zero-padded `HH:MM:SS`.
///
/// Negative durations are clamped to zero: every duration shown by this
/// application (elapsed, remaining, countdown, hours worked) is defined as
/// non-negative.
pub fn format_duration(d: Duration) -> String {
    let total = d.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a wall-clock time as `HH:MM:SS`.
pub fn format_clock(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Blink rendering: colons replaced by spaces. The caller toggles between
/// this and the plain rendering once per tick.
pub fn blink(s: &str) -> String {
    s.replace(':', " ")
}

/// Capture-time timestamp carried by every log entry.
pub fn entry_timestamp(now: DateTime<Local>) -> String {
    now.format("%d-%m-%Y - %H:%M:%S").to_string()
}

pub fn parse_clock(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_zero_padded() {
        assert_eq!(format_duration(Duration::seconds(0)), "00:00:00");
        assert_eq!(format_duration(Duration::seconds(61)), "00:01:01");
        assert_eq!(format_duration(Duration::seconds(8 * 3600 + 30 * 60)), "08:30:00");
    }

    #[test]
    fn negative_duration_clamps_to_zero() {
        assert_eq!(format_duration(Duration::seconds(-1)), "00:00:00");
        assert_eq!(format_duration(Duration::hours(-5)), "00:00:00");
    }

    #[test]
    fn duration_formatting_is_monotonic() {
        let mut prev = format_duration(Duration::seconds(0));
        for secs in [1, 59, 60, 3599, 3600, 86399] {
            let cur = format_duration(Duration::seconds(secs));
            assert!(prev <= cur, "{prev} > {cur}");
            prev = cur;
        }
    }

    #[test]
    fn blink_replaces_colons() {
        assert_eq!(blink("12:34:56"), "12 34 56");
    }

    #[test]
    fn parse_clock_accepts_hms_and_hm() {
        assert_eq!(
            parse_clock("17:30:00").unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap()
        );
        assert_eq!(
            parse_clock("17:30").unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap()
        );
        assert!(parse_clock("not-a-time").is_err());
    }
}
