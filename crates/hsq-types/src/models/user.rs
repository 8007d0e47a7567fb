use serde::{Deserialize, Serialize};

use super::role::Role;

/// Authenticated user as supplied by the auth provider.
///
/// An unauthenticated caller is `None`, never a user with an empty role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Normalized role
    pub fn role(&self) -> Role {
        Role::new(&self.role)
    }

    pub fn identity(&self) -> Identity {
        Identity {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Name and email shown in the panel footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn initials(&self) -> String {
        let from_name = initials(&self.name);
        if !from_name.is_empty() {
            return from_name;
        }
        initials(&self.email)
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: "Admin Manager".to_string(),
            email: "admin@hsqtowers.com".to_string(),
        }
    }
}

/// Up to two upper-case initials from the first two words of `name`
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
