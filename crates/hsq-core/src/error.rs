//! Error types for hsq-core

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for configuration operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse TOML in {path}: {message}")]
    TomlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Could not determine the configuration directory")]
    ConfigDirNotFound,
}

impl CoreError {
    /// Actionable hint for the CLI, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::FileNotFound { path } => Some(format!(
                "Create it with: hsq-admin --config {} init",
                path.display()
            )),
            CoreError::FileRead { path, .. } => {
                Some(format!("Check permissions: chmod +r {}", path.display()))
            }
            CoreError::TomlParse { .. } => {
                Some("Compare with the output of `hsq-admin init` for the expected layout".into())
            }
            CoreError::ConfigDirNotFound => {
                Some("Pass --config <PATH> or set HSQ_ADMIN_CONFIG".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_for_missing_file() {
        let err = CoreError::FileNotFound {
            path: PathBuf::from("/etc/hsq/panel.toml"),
        };
        let hint = err.suggestion().unwrap();
        assert!(hint.contains("/etc/hsq/panel.toml"));
        assert!(hint.contains("init"));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = CoreError::InvalidConfig {
            message: "duplicate href /rooms".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid configuration: duplicate href /rooms");
        assert!(err.suggestion().is_none());
    }
}
