use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Runtime configuration, persisted as YAML in the platform config dir.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Location of the job history CSV file.
    pub history: String,
    /// Simulated latitude logged with every event.
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Simulated longitude logged with every event.
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// ΔT magnitudes beyond this trigger a plausibility warning.
    #[serde(default = "default_max_delta_t")]
    pub max_delta_t: f64,
}

fn default_latitude() -> f64 {
    40.7128
}
fn default_longitude() -> f64 {
    -74.0060
}
fn default_max_delta_t() -> f64 {
    60.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history: Self::history_file().to_string_lossy().to_string(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            max_delta_t: default_max_delta_t(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fieldaid")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".fieldaid")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fieldaid.conf")
    }

    /// Return the default path of the job history CSV
    pub fn history_file() -> PathBuf {
        Self::config_dir().join("job_history.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the current configuration to the config file
    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Verify that the config file exists and parses.
    pub fn check() -> AppResult<()> {
        let path = Self::config_file();

        if !path.exists() {
            return Err(AppError::Config(format!(
                "missing config file {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        let _: Config =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

        Ok(())
    }

    /// Initialize the configuration directory and file.
    ///
    /// Never creates the history file itself: the first logged event
    /// creates it, header first.
    pub fn init_all(custom_history: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // History path: user provided or default
        let history_path = match custom_history {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::history_file(),
        };

        let config = Config {
            history: history_path.to_string_lossy().to_string(),
            ..Default::default()
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
