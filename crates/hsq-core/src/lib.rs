//! hsq-core - Core library for hsq-admin
//!
//! Loads and validates the navigation panel configuration shared by the
//! web server and the CLI.

pub mod config;
pub mod error;
pub mod validation;

pub use config::{default_config_path, Brand, PanelConfig, CONFIG_ENV_VAR};
pub use error::CoreError;
pub use validation::{validate, ConfigIssue, IssueSeverity, ValidationReport};

// The navigation model lives in hsq-types so the WASM frontend can share it.
pub use hsq_types as types;
