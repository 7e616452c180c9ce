//! Single-threaded session driver. The interactive loop (or a test) feeds
//! `Event`s in; the runner owns the session, the artifact store and the
//! close gate, and is the only code path that mutates any of them.

use crate::config::Config;
use crate::errors::AppResult;
use crate::report::{ArtifactStore, render};
use crate::session::Session;
use crate::session::gate::Gate;
use crate::ui::display::{self, DisplayStrings};
use chrono::{DateTime, Duration, Local, NaiveTime};
use std::path::{Path, PathBuf};

/// Everything the loop can feed into the runner.
pub enum Event {
    /// Periodic refresh; toggles the blink rendering.
    Tick,
    /// Free-text submission from the operator.
    Submit(String),
    /// New planned leave time; affects only the countdown display.
    SetLeaveTime(NaiveTime),
    /// Close request carrying the secret the operator typed.
    CloseRequest(String),
}

pub enum Outcome {
    /// Display refresh data for a tick.
    Status(DisplayStrings),
    /// Entry recorded and the artifact regenerated.
    Recorded,
    /// Submission ignored (blank message), no state change.
    Ignored,
    /// Leave time updated.
    LeaveTimeSet,
    /// Wrong secret: session unchanged, still open.
    Denied,
    /// Session closed and artifact sealed at this path.
    Closed(PathBuf),
}

pub struct SessionRunner {
    session: Session,
    store: ArtifactStore,
    gate: Gate,
    ideal_end: DateTime<Local>,
    leave_at: NaiveTime,
    blink: bool,
}

impl SessionRunner {
    /// Set up the store and write the initial (empty) report, exactly like
    /// every later regeneration.
    pub fn new(cfg: &Config, session: Session) -> AppResult<Self> {
        let started_at = session.started_at();
        let mut store =
            ArtifactStore::for_date(Path::new(&cfg.log_dir), started_at.date_naive())?;
        store.write(&render(session.header(), session.entries()))?;

        Ok(Self {
            session,
            store,
            gate: Gate::new(cfg.close_secret.clone()),
            ideal_end: started_at + Duration::hours(cfg.ideal_work_hours),
            leave_at: (started_at + Duration::hours(cfg.actual_work_hours)).time(),
            blink: false,
        })
    }

    pub fn artifact_path(&self) -> &Path {
        self.store.path()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn entry_count(&self) -> usize {
        self.session.entries().len()
    }

    /// Process one event at the given wall-clock instant.
    ///
    /// A failed regeneration after a submission surfaces as an error, but
    /// the entry stays recorded in memory: the next successful regeneration
    /// carries it into the artifact.
    pub fn handle(&mut self, event: Event, now: DateTime<Local>) -> AppResult<Outcome> {
        match event {
            Event::Tick => {
                self.blink = !self.blink;
                Ok(Outcome::Status(display::refresh(
                    now,
                    self.session.started_at(),
                    self.ideal_end,
                    self.leave_at,
                    self.blink,
                )))
            }

            Event::Submit(message) => {
                if !self.session.append_at(now, &message) {
                    return Ok(Outcome::Ignored);
                }
                self.regenerate()?;
                Ok(Outcome::Recorded)
            }

            Event::SetLeaveTime(t) => {
                self.leave_at = t;
                Ok(Outcome::LeaveTimeSet)
            }

            Event::CloseRequest(secret) => {
                if !self.gate.authorize(&secret) {
                    return Ok(Outcome::Denied);
                }
                self.session.close_at(now);
                self.regenerate()?;
                self.store.seal()?;
                Ok(Outcome::Closed(self.store.path().to_path_buf()))
            }
        }
    }

    fn regenerate(&mut self) -> AppResult<()> {
        let bytes = render(self.session.header(), self.session.entries());
        self.store.write(&bytes)
    }
}
