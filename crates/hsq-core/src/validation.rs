//! Navigation entry validation
//!
//! Collects every problem in one pass instead of stopping at the first, so
//! `hsq-admin check` can print the whole list. Errors make a configuration
//! unusable; warnings describe entries that load fine but probably do not do
//! what the author meant.

use std::collections::HashSet;

use hsq_types::{requires_exact_match, Icon, NavEntry, RoleRestriction};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Warning,
    Error,
}

/// One problem found in the entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Label of the offending entry (its name, or href when unnamed)
    pub entry: String,
    pub message: String,
    pub severity: IssueSeverity,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub issues: Vec<ConfigIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, entry: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ConfigIssue {
            entry: entry.into(),
            message: message.into(),
            severity: IssueSeverity::Error,
        });
    }

    pub fn add_warning(&mut self, entry: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ConfigIssue {
            entry: entry.into(),
            message: message.into(),
            severity: IssueSeverity::Warning,
        });
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == IssueSeverity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
    }

    /// (warnings, errors)
    pub fn counts(&self) -> (usize, usize) {
        (self.warnings().count(), self.errors().count())
    }

    /// Fold errors into a single [`CoreError::InvalidConfig`]
    pub fn into_result(self) -> Result<Vec<ConfigIssue>, CoreError> {
        if !self.has_errors() {
            return Ok(self.issues);
        }
        let message = self
            .errors()
            .map(|i| format!("{}: {}", i.entry, i.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(CoreError::InvalidConfig { message })
    }
}

fn label(entry: &NavEntry) -> String {
    if entry.name.trim().is_empty() {
        entry.href.clone()
    } else {
        entry.name.clone()
    }
}

/// Check an entry list for structural errors and likely mistakes
pub fn validate(entries: &[NavEntry]) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut seen = HashSet::new();

    for entry in entries {
        let name = label(entry);

        if entry.name.trim().is_empty() {
            report.add_error(&name, "name must not be empty");
        }
        if !entry.href.starts_with('/') {
            report.add_error(&name, format!("href '{}' must start with '/'", entry.href));
        }
        if !seen.insert(entry.href.as_str()) {
            report.add_error(&name, format!("duplicate href '{}'", entry.href));
        }

        match &entry.roles {
            RoleRestriction::Unrestricted => {
                report.add_warning(
                    &name,
                    "no roles declared; visible to everyone, signed in or not",
                )
            }
            RoleRestriction::Only(roles) if roles.is_empty() => {
                report.add_warning(&name, "empty role list; hidden from everyone")
            }
            RoleRestriction::Only(_) => {}
        }

        if entry.icon == Icon::Unknown {
            report.add_warning(&name, "unknown icon; a placeholder glyph will be shown");
        }
    }

    // Prefix matching makes `/rooms` active on `/rooms-extra` as well.
    for outer in entries {
        if outer.href.is_empty() || requires_exact_match(&outer.href) {
            continue;
        }
        for inner in entries {
            if inner.href != outer.href && inner.href.starts_with(&outer.href) {
                report.add_warning(
                    label(outer),
                    format!(
                        "href '{}' is a prefix of '{}'; both will be highlighted there",
                        outer.href, inner.href
                    ),
                );
            }
        }
    }

    report
}
