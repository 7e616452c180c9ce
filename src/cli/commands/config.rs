use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config { print_config, path } = cmd else {
        return Ok(());
    };

    if *path {
        println!("{}", Config::config_file().display());
    }

    if *print_config {
        let yaml = serde_yaml::to_string(cfg)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        print!("{yaml}");
    }

    Ok(())
}
