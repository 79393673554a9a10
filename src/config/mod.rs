use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, sibling};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data_file: String,
    pub backup_file: String,
    pub log_file: String,
    pub clear_screen: bool,
    /// External editor used for notes; plain prompt when unset.
    pub editor: Option<String>,
    pub wrap_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            data_file: dir.join("tasklog.csv").to_string_lossy().to_string(),
            backup_file: dir.join("backup.csv").to_string_lossy().to_string(),
            log_file: dir.join("worklog.log").to_string_lossy().to_string(),
            clear_screen: true,
            editor: None,
            wrap_width: 72,
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worklog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Point the config at another data file. Backup and log files follow it
    /// as siblings so a custom data file never touches the default ones.
    pub fn with_data_file(mut self, data_file: &str) -> Self {
        let data = expand_tilde(data_file);
        self.backup_file = sibling(&data, ".backup.csv").to_string_lossy().to_string();
        self.log_file = sibling(&data, ".log").to_string_lossy().to_string();
        self.data_file = data.to_string_lossy().to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn backup_path(&self) -> PathBuf {
        expand_tilde(&self.backup_file)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }
}
