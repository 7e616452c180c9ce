//! In-memory session state: header metadata plus the append-only sequence of
//! log entries. All mutation goes through `append_at` and `close_at`; entries
//! are never edited or removed once recorded.

pub mod gate;

use crate::probes::{GeoSnapshot, MachineInfo};
use crate::utils::time::{entry_timestamp, format_clock, format_duration};
use chrono::{DateTime, Local};

/// One submitted log line. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Capture-time timestamp, `DD-MM-YYYY - HH:MM:SS`.
    pub timestamp: String,
    /// Verbatim user text.
    pub message: String,
}

/// Report header metadata, filled from environment probes at session start.
/// `logout_time` and `hours_worked` are set exactly once, at close.
#[derive(Debug, Clone)]
pub struct SessionHeader {
    pub operator: String,
    pub hostname: String,
    pub machine_make: String,
    pub machine_model: String,
    pub login_date: String,
    pub login_time: String,
    pub logout_time: Option<String>,
    pub hours_worked: Option<String>,
    pub location: GeoSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Closed,
}

pub struct Session {
    header: SessionHeader,
    entries: Vec<LogEntry>,
    started_at: DateTime<Local>,
    state: SessionState,
}

impl Session {
    pub fn start(
        operator: String,
        hostname: String,
        machine: MachineInfo,
        location: GeoSnapshot,
        started_at: DateTime<Local>,
    ) -> Self {
        let header = SessionHeader {
            operator,
            hostname,
            machine_make: machine.make,
            machine_model: machine.model,
            login_date: started_at.format("%d/%m/%Y").to_string(),
            login_time: format_clock(started_at.time()),
            logout_time: None,
            hours_worked: None,
            location,
        };

        Self {
            header,
            entries: Vec::new(),
            started_at,
            state: SessionState::Open,
        }
    }

    /// Record a log entry with a capture-time timestamp. Empty or
    /// whitespace-only messages are ignored (the only validation), as is any
    /// submission after close. Returns whether an entry was recorded.
    pub fn append_at(&mut self, now: DateTime<Local>, message: &str) -> bool {
        if self.state == SessionState::Closed {
            return false;
        }
        let message = message.trim();
        if message.is_empty() {
            return false;
        }

        self.entries.push(LogEntry {
            timestamp: entry_timestamp(now),
            message: message.to_string(),
        });
        true
    }

    /// Set logout time and hours worked (clamped at zero) and mark the
    /// session closed. Terminal: no entry can be recorded afterwards.
    pub fn close_at(&mut self, now: DateTime<Local>) {
        self.header.logout_time = Some(format_clock(now.time()));
        self.header.hours_worked = Some(format_duration(now - self.started_at));
        self.state = SessionState::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn header(&self) -> &SessionHeader {
        &self.header
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 2, h, m, s).unwrap()
    }

    fn session() -> Session {
        Session::start(
            "alice".to_string(),
            "workstation".to_string(),
            MachineInfo::default(),
            GeoSnapshot::default(),
            at(9, 0, 0),
        )
    }

    #[test]
    fn entries_keep_submission_order() {
        let mut s = session();
        assert!(s.append_at(at(9, 5, 0), "Started task A"));
        assert!(s.append_at(at(9, 10, 0), "Finished task A"));

        let msgs: Vec<_> = s.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(msgs, ["Started task A", "Finished task A"]);
    }

    #[test]
    fn blank_messages_are_ignored() {
        let mut s = session();
        assert!(!s.append_at(at(9, 5, 0), ""));
        assert!(!s.append_at(at(9, 5, 0), "   \t "));
        assert!(s.entries().is_empty());
    }

    #[test]
    fn message_text_is_kept_verbatim_after_trim() {
        let mut s = session();
        assert!(s.append_at(at(9, 5, 0), "  kept: spaces  inside  "));
        assert_eq!(s.entries()[0].message, "kept: spaces  inside");
        assert_eq!(s.entries()[0].timestamp, "02-06-2025 - 09:05:00");
    }

    #[test]
    fn close_sets_logout_and_hours_once() {
        let mut s = session();
        assert_eq!(s.header().logout_time, None);
        s.close_at(at(17, 30, 0));

        assert!(!s.is_open());
        assert_eq!(s.header().login_time, "09:00:00");
        assert_eq!(s.header().logout_time.as_deref(), Some("17:30:00"));
        assert_eq!(s.header().hours_worked.as_deref(), Some("08:30:00"));
    }

    #[test]
    fn append_after_close_is_refused() {
        let mut s = session();
        s.close_at(at(17, 30, 0));
        assert!(!s.append_at(at(17, 31, 0), "too late"));
        assert!(s.entries().is_empty());
    }

    #[test]
    fn negative_elapsed_clamps_to_zero() {
        // Clock skew: close before start still renders a valid duration.
        let mut s = session();
        s.close_at(at(8, 0, 0));
        assert_eq!(s.header().hours_worked.as_deref(), Some("00:00:00"));
    }
}
