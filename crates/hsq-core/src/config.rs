//! Panel configuration
//!
//! Stored as TOML in `<config_dir>/hsq-admin/panel.toml`:
//!
//! ```toml
//! [brand]
//! title = "HSQ ADMIN"
//! subtitle = "Management Panel"
//! logo = "/HSQ.png"
//!
//! [identity]
//! name = "Admin Manager"
//! email = "admin@hsqtowers.com"
//!
//! # Omit to serve a signed-out session
//! [session]
//! name = "Admin Manager"
//! email = "admin@hsqtowers.com"
//! role = "admin"
//!
//! [[navigation]]
//! name = "Rooms"
//! href = "/rooms"
//! icon = "bed"
//! roles = ["admin", "receptionist"]
//! ```
//!
//! A missing file falls back to the built-in HSQ panel. A file that exists
//! but does not parse or validate is an error.

use std::path::{Path, PathBuf};

pub use hsq_types::Brand;
use hsq_types::{build_menu, default_entries, Identity, MenuItem, NavEntry, User};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::validation::{validate, ValidationReport};

/// Environment variable overriding the configuration path
pub const CONFIG_ENV_VAR: &str = "HSQ_ADMIN_CONFIG";

const APP_DIR: &str = "hsq-admin";
const CONFIG_FILE_NAME: &str = "panel.toml";

/// Everything the navigation panel needs besides live auth and route state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub brand: Brand,
    /// Footer identity shown when the auth provider has no user details
    pub identity: Identity,
    /// Fixed user returned by `/api/session`, standing in for a real auth provider.
    /// No `[session]` table means nobody is signed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<User>,
    pub navigation: Vec<NavEntry>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        let identity = Identity::default();
        Self {
            session: Some(User::new(&identity.name, &identity.email, "admin")),
            brand: Brand::default(),
            identity,
            navigation: default_entries(),
        }
    }
}

/// `<config_dir>/hsq-admin/panel.toml`
pub fn default_config_path() -> Result<PathBuf, CoreError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
        .ok_or(CoreError::ConfigDirNotFound)
}

fn read_config(path: &Path) -> Result<String, CoreError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CoreError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CoreError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

impl PanelConfig {
    /// Parse TOML content without validating the entries
    pub fn parse_unchecked(content: &str, path: &Path) -> Result<Self, CoreError> {
        toml::from_str(content).map_err(|e| CoreError::TomlParse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
            source: e,
        })
    }

    /// Parse and validate TOML content. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, CoreError> {
        let config = Self::parse_unchecked(content, path)?;

        for issue in config.validate().into_result()? {
            warn!(entry = %issue.entry, "{}", issue.message);
        }

        Ok(config)
    }

    /// Read and parse `path` without validating; a missing file is
    /// [`CoreError::FileNotFound`]
    pub fn load_unchecked(path: &Path) -> Result<Self, CoreError> {
        Self::parse_unchecked(&read_config(path)?, path)
    }

    /// Load from `path`; a missing file is [`CoreError::FileNotFound`]
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let config = Self::parse(&read_config(path)?, path)?;
        info!(
            path = %path.display(),
            entries = config.navigation.len(),
            "Loaded panel configuration"
        );
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, CoreError> {
        match Self::load(path) {
            Err(CoreError::FileNotFound { .. }) => {
                info!(path = %path.display(), "No panel configuration found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn to_toml_string(&self) -> Result<String, CoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CoreError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| CoreError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Saved panel configuration");
        Ok(())
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.navigation
    }

    pub fn validate(&self) -> ValidationReport {
        validate(&self.navigation)
    }

    /// Menu as seen by `role` on `current_path`
    pub fn menu(&self, role: Option<&str>, current_path: &str) -> Vec<MenuItem> {
        let items = build_menu(&self.navigation, role, current_path);
        debug!(
            role = role.unwrap_or("<none>"),
            path = current_path,
            visible = items.len(),
            "Built navigation menu"
        );
        items
    }
}
