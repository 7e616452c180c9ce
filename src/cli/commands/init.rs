use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::default();
    if let Some(dir) = &cli.log_dir {
        cfg.log_dir = dir.clone();
    }
    if let Some(secret) = &cli.secret {
        cfg.close_secret = secret.clone();
    }

    cfg.init_all()?;

    success(format!("Config file: {:?}", Config::config_file()));
    success(format!("Report dir:  {:?}", cfg.log_dir));
    Ok(())
}
