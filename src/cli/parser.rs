use clap::{Parser, Subcommand};

/// Command-line interface definition for timekeeper
/// CLI application to log work sessions into sealed daily PDF reports
#[derive(Parser)]
#[command(
    name = "timekeeper",
    version = env!("CARGO_PKG_VERSION"),
    about = "A time-keeping CLI: log work sessions into sealed daily PDF reports",
    long_about = None
)]
pub struct Cli {
    /// Override the report output directory (useful for tests or custom setups)
    #[arg(global = true, long = "log-dir")]
    pub log_dir: Option<String>,

    /// Override the close secret (useful for tests)
    #[arg(global = true, long = "secret", hide = true)]
    pub secret: Option<String>,

    /// Skip the startup geolocation lookup
    #[arg(global = true, long = "offline")]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and report directory
    Init,

    /// Manage the configuration file (view or locate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Start an interactive work session
    Start {
        /// Planned leave time (HH:MM:SS); defaults to start + planned work hours
        #[arg(long, value_name = "TIME")]
        leave: Option<String>,
    },

    /// Check the seal of a finished report
    Verify {
        /// Path of the report file to check
        file: String,
    },
}
