//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::MonitorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: MonitorConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn minimal_file_uses_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.probes.local_addresses.len(), 3);
        assert_eq!(config.signal.idle_interval_secs, 300);
        assert_eq!(config.gpio.local_pin, 17);
    }

    #[test]
    fn partial_file_overrides_defaults() {
        let file = write_config(
            r#"
            [probes]
            local_addresses = ["192.168.1.1"]
            echo_count = 1

            [signal]
            idle_interval_secs = 60
            "#,
        );
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.probes.local_addresses, vec!["192.168.1.1"]);
        assert_eq!(config.probes.echo_count, 1);
        assert_eq!(config.signal.idle_interval_secs, 60);
        // Untouched sections keep their defaults.
        assert_eq!(config.probes.wan_addresses.len(), 3);
    }

    #[test]
    fn empty_local_list_fails_validation() {
        let file = write_config(
            r#"
            [probes]
            local_addresses = []
            "#,
        );

        match load_config(file.path()) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec![ValidationError::EmptyLocalSet]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_config("probes = nonsense");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let missing = Path::new("/nonexistent/pinglight.toml");
        assert!(matches!(load_config(missing), Err(ConfigError::Io(_))));
    }
}
