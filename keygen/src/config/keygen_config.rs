use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeygenConfig {
    /// Base name shared by the three key files
    #[serde(default)]
    pub key_name: Option<String>,

    /// Directory the key files are written to, created when missing
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Database user named in the SQL and secret renderings (defaults to the key name)
    #[serde(default)]
    pub target_user: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log directory for file-based logging; logs go to stderr when unset
    pub log_dir: Option<String>,

    /// Log file name for file-based logging
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_output_dir() -> String {
    "output_keys".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_file() -> String {
    "keygen.log".to_string()
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            key_name: None,
            output_dir: default_output_dir(),
            target_user: None,
            log_level: default_log_level(),
            log_dir: None,
            log_file: default_log_file(),
        }
    }
}

impl KeygenConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: KeygenConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`KeygenConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
