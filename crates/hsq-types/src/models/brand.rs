use serde::{Deserialize, Serialize};

/// Panel header branding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub title: String,
    pub subtitle: String,
    /// URL of the logo image
    pub logo: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            title: "HSQ ADMIN".to_string(),
            subtitle: "Management Panel".to_string(),
            logo: "/HSQ.png".to_string(),
        }
    }
}
