use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the daily report files (one per calendar day).
    pub log_dir: String,
    /// Secret required to close a session. Compared for exact equality.
    pub close_secret: String,
    #[serde(default = "default_ideal_hours")]
    pub ideal_work_hours: i64,
    #[serde(default = "default_actual_hours")]
    pub actual_work_hours: i64,
    #[serde(default = "default_geo_endpoint")]
    pub geo_endpoint: String,
    #[serde(default = "default_geo_timeout")]
    pub geo_timeout_secs: u64,
    #[serde(default)]
    pub offline: bool,
}

fn default_ideal_hours() -> i64 {
    8
}
fn default_actual_hours() -> i64 {
    10
}
fn default_geo_endpoint() -> String {
    "https://ipinfo.io/json".to_string()
}
fn default_geo_timeout() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: Self::log_dir_default().to_string_lossy().to_string(),
            close_secret: "BYEBYE".to_string(),
            ideal_work_hours: default_ideal_hours(),
            actual_work_hours: default_actual_hours(),
            geo_endpoint: default_geo_endpoint(),
            geo_timeout_secs: default_geo_timeout(),
            offline: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timekeeper")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".timekeeper")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timekeeper.conf")
    }

    /// Default location of the daily report directory
    pub fn log_dir_default() -> PathBuf {
        Self::config_dir().join("daily_log")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    /// Write the configuration file and create the report directory
    pub fn init_all(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        fs::create_dir_all(&self.log_dir)?;

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        Ok(())
    }
}
