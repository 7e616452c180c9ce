pub mod display;
pub mod messages;
