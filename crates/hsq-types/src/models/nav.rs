use serde::{Deserialize, Serialize};

use super::role::Role;

/// Named glyph shown next to a navigation entry.
///
/// The names follow the Lucide icon set. Glyph rendering belongs to the icon
/// provider; unknown names deserialize to [`Icon::Unknown`] and render as a
/// neutral placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Users,
    Calendar,
    Bed,
    Ticket,
    Percent,
    Archive,
    FileText,
    Settings,
    LogOut,
    Close,
    Star,
    #[serde(other)]
    Unknown,
}

impl Icon {
    /// Every named glyph, in declaration order (excludes `Unknown`)
    pub const ALL: [Icon; 12] = [
        Icon::Home,
        Icon::Users,
        Icon::Calendar,
        Icon::Bed,
        Icon::Ticket,
        Icon::Percent,
        Icon::Archive,
        Icon::FileText,
        Icon::Settings,
        Icon::LogOut,
        Icon::Close,
        Icon::Star,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::Users => "users",
            Icon::Calendar => "calendar",
            Icon::Bed => "bed",
            Icon::Ticket => "ticket",
            Icon::Percent => "percent",
            Icon::Archive => "archive",
            Icon::FileText => "file-text",
            Icon::Settings => "settings",
            Icon::LogOut => "log-out",
            Icon::Close => "close",
            Icon::Star => "star",
            Icon::Unknown => "unknown",
        }
    }
}

/// Who may see a navigation entry.
///
/// An omitted `roles` field and an empty `roles = []` mean different things:
/// the first is unrestricted, the second hides the entry from everyone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Vec<Role>>", into = "Option<Vec<Role>>")]
pub enum RoleRestriction {
    /// No `roles` field: visible to every caller
    #[default]
    Unrestricted,
    /// Visible only to the listed roles
    Only(Vec<Role>),
}

impl RoleRestriction {
    pub fn only<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        RoleRestriction::Only(roles.into_iter().map(Into::into).collect())
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, RoleRestriction::Unrestricted)
    }

    /// Whether a caller with `role` passes this restriction.
    ///
    /// An absent role never matches a restricted entry.
    pub fn permits(&self, role: Option<&Role>) -> bool {
        match self {
            RoleRestriction::Unrestricted => true,
            RoleRestriction::Only(roles) => role.is_some_and(|r| roles.contains(r)),
        }
    }

    /// Declared roles, empty when unrestricted
    pub fn roles(&self) -> &[Role] {
        match self {
            RoleRestriction::Unrestricted => &[],
            RoleRestriction::Only(roles) => roles,
        }
    }
}

impl From<Option<Vec<Role>>> for RoleRestriction {
    fn from(value: Option<Vec<Role>>) -> Self {
        match value {
            None => RoleRestriction::Unrestricted,
            Some(roles) => RoleRestriction::Only(roles),
        }
    }
}

impl From<RoleRestriction> for Option<Vec<Role>> {
    fn from(value: RoleRestriction) -> Self {
        match value {
            RoleRestriction::Unrestricted => None,
            RoleRestriction::Only(roles) => Some(roles),
        }
    }
}

/// A single link in the navigation panel. Immutable once defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label
    pub name: String,
    /// Target path, unique within the entry list
    pub href: String,
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "RoleRestriction::is_unrestricted")]
    pub roles: RoleRestriction,
}

impl NavEntry {
    /// Create an unrestricted entry
    pub fn new(name: impl Into<String>, href: impl Into<String>, icon: Icon) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            icon,
            roles: RoleRestriction::Unrestricted,
        }
    }

    /// Restrict the entry to the given roles
    pub fn with_roles<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        self.roles = RoleRestriction::only(roles);
        self
    }

    pub fn is_visible_to(&self, role: Option<&Role>) -> bool {
        self.roles.permits(role)
    }
}
