//! API request and response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::web::AuthVariant;

/// Query string accepted by the landing page.
#[derive(Debug, Default, Deserialize)]
pub struct LandingQuery {
    /// `register` shows the registration form; anything else shows login.
    #[serde(default)]
    pub variant: Option<String>,
}

impl LandingQuery {
    pub fn auth_variant(&self) -> AuthVariant {
        match self.variant.as_deref() {
            Some("register") => AuthVariant::Register,
            _ => AuthVariant::Login,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Run mode the process started in.
    pub run_mode: String,
    /// Database connectivity.
    pub database: String,
    /// Timestamp.
    pub timestamp: String,
}
