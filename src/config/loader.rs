//! Configuration loading from disk.

use std::path::Path;
use std::fs;
use crate::config::schema::LookupConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LookupConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LookupConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load from `path` when given, otherwise use defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<LookupConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(LookupConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_file() {
        let file = write_config(
            r#"
            [endpoint]
            base_url = "http://localhost:9000"

            [timeouts]
            request_ms = 1500

            [progress]
            enabled = false
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.endpoint.base_url, "http://localhost:9000");
        assert_eq!(config.timeouts.request_ms, 1500);
        assert!(!config.progress.enabled);
        assert_eq!(config.progress.interval_ms, 130);
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("[timeouts\nrequest_ms = ");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_error() {
        let file = write_config("[timeouts]\nrequest_ms = 0\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("timeouts.request_ms"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/genderize.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_default_without_path() {
        let config = load_or_default(None).unwrap();
        assert_eq!(config.timeouts.request_ms, 5000);
    }
}
