mod keygen_config;

pub use keygen_config::KeygenConfig;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_full_config() {
        let content = r#"
key_name = "etl_loader"
output_dir = "/var/keys"
target_user = "ETL_USER"
log_level = "debug"
log_dir = "logs"
log_file = "generator.log"
"#;
        let file = create_temp_file(content);
        let config = KeygenConfig::load(file.path()).unwrap();

        assert_eq!(config.key_name.as_deref(), Some("etl_loader"));
        assert_eq!(config.output_dir, "/var/keys");
        assert_eq!(config.target_user.as_deref(), Some("ETL_USER"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir.as_deref(), Some("logs"));
        assert_eq!(config.log_file, "generator.log");
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let file = create_temp_file("");
        let config = KeygenConfig::load(file.path()).unwrap();

        assert_eq!(config.key_name, None);
        assert_eq!(config.output_dir, "output_keys");
        assert_eq!(config.target_user, None);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
        assert_eq!(config.log_file, "keygen.log");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = KeygenConfig::load_or_default(tmp.path().join("keygen.toml")).unwrap();
        assert_eq!(config.output_dir, "output_keys");
        assert_eq!(config.key_name, None);
    }

    #[test]
    fn load_nonexistent_file_returns_error() {
        let result = KeygenConfig::load("/nonexistent/path/keygen.toml");
        assert!(result.is_err());
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let file = create_temp_file("this is not valid toml {{{");
        assert!(KeygenConfig::load(file.path()).is_err());
        assert!(KeygenConfig::load_or_default(file.path()).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let original = KeygenConfig {
            key_name: Some("brave_lion".to_string()),
            target_user: Some("ANALYST".to_string()),
            ..KeygenConfig::default()
        };

        let file = NamedTempFile::new().unwrap();
        original.save(file.path()).unwrap();
        let loaded = KeygenConfig::load(file.path()).unwrap();

        assert_eq!(loaded.key_name.as_deref(), Some("brave_lion"));
        assert_eq!(loaded.target_user.as_deref(), Some("ANALYST"));
        assert_eq!(loaded.output_dir, original.output_dir);
        assert_eq!(loaded.log_dir, None);
    }
}
