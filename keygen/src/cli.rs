use crate::config::KeygenConfig;
use clap::{Parser, ValueEnum};

/// Which renderings are printed after the key files are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Show {
    All,
    Sql,
    Secret,
    Pkcs8,
    None,
}

impl Show {
    pub fn sql(self) -> bool {
        matches!(self, Show::All | Show::Sql)
    }

    pub fn secret(self) -> bool {
        matches!(self, Show::All | Show::Secret)
    }

    pub fn pkcs8(self) -> bool {
        matches!(self, Show::All | Show::Pkcs8)
    }
}

#[derive(Parser, Debug)]
#[command(name = "keygen")]
#[command(author, version)]
#[command(about = "Generate an RSA-2048 key pair and render its SQL and secret forms", long_about = None)]
pub struct CliArgs {
    /// Path to configuration file (optional, defaults apply when missing)
    #[arg(short, long, env = "KEYGEN_CONFIG", default_value = "keygen.toml")]
    pub config: String,

    /// Base name of the generated key files
    #[arg(short = 'n', long, env = "KEYGEN_KEY_NAME")]
    pub key_name: Option<String>,

    /// Directory the key files are written to
    #[arg(short, long, env = "KEYGEN_OUTPUT_DIR")]
    pub output_dir: Option<String>,

    /// Database user for the SQL and secret renderings (defaults to the key name)
    #[arg(short = 'u', long, env = "KEYGEN_TARGET_USER")]
    pub target_user: Option<String>,

    /// Renderings to print
    #[arg(long, value_enum, default_value_t = Show::All)]
    pub show: Show,

    /// Write the effective configuration back to the config file
    #[arg(long)]
    pub save_config: bool,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override log directory
    #[arg(long)]
    pub log_dir: Option<String>,

    /// Override log file name
    #[arg(long)]
    pub log_file: Option<String>,
}

impl CliArgs {
    /// Apply command line overrides on top of the file configuration.
    pub fn apply_to(&self, cfg: &mut KeygenConfig) {
        if let Some(key_name) = &self.key_name {
            cfg.key_name = Some(key_name.clone());
        }
        if let Some(output_dir) = &self.output_dir {
            cfg.output_dir = output_dir.clone();
        }
        if let Some(target_user) = &self.target_user {
            cfg.target_user = Some(target_user.clone());
        }
        if let Some(log_level) = &self.log_level {
            cfg.log_level = log_level.clone();
        }
        if let Some(log_dir) = &self.log_dir {
            cfg.log_dir = Some(log_dir.clone());
        }
        if let Some(log_file) = &self.log_file {
            cfg.log_file = log_file.clone();
        }
    }
}
