use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Minutes in one day, the default upper bound for a single interruption.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Reject interruptions longer than `max_duration` minutes
    #[serde(default = "default_enforce_daily_limit")]
    pub enforce_daily_limit: bool,
    #[serde(default = "default_max_duration")]
    pub max_duration: i64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_enforce_daily_limit() -> bool {
    true
}
fn default_max_duration() -> i64 {
    MINUTES_PER_DAY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            enforce_daily_limit: default_enforce_daily_limit(),
            max_duration: default_max_duration(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.journal`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".journal")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("journal.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("journal.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();

        if cfg.max_duration <= 0 {
            return Err(AppError::Config(format!(
                "max_duration must be positive, found {}",
                cfg.max_duration
            )));
        }
        Ok(cfg)
    }

    /// Upper bound applied to `log` durations, if any
    pub fn duration_limit(&self) -> Option<i64> {
        self.enforce_daily_limit.then_some(self.max_duration)
    }

    /// Initialize configuration and database files.
    /// Returns the configuration that was written (or would have been, in test mode).
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided (relative to the config dir) or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
