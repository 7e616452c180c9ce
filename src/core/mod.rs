pub mod runner;

pub use runner::{Event, Outcome, SessionRunner};
