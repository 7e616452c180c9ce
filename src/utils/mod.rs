pub mod time;

pub use time::format_duration;
pub use time::format_clock;
