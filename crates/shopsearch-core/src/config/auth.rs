//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// JWT verification configuration.
///
/// The scaffold only decodes bearer tokens; issuing them belongs to a later
/// phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for token verification.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
        }
    }
}

fn default_jwt_secret() -> String {
    "change-me-in-production".to_string()
}
