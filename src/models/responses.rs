use serde::{Deserialize, Serialize};
use crate::models::domain::{Profile, ScoredProfile};

/// Fields that never leave the service in a response body
pub const SENSITIVE_FIELDS: &[&str] = &["password"];

/// Profile as shown to clients, with sensitive fields removed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PublicProfile(Profile);

impl PublicProfile {
    pub fn into_inner(self) -> Profile {
        self.0
    }
}

impl From<Profile> for PublicProfile {
    fn from(mut profile: Profile) -> Self {
        for field in SENSITIVE_FIELDS {
            profile.extra.remove(*field);
        }
        Self(profile)
    }
}

/// Ranked match as shown to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicMatch {
    #[serde(flatten)]
    pub profile: PublicProfile,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: f64,
}

impl From<ScoredProfile> for PublicMatch {
    fn from(scored: ScoredProfile) -> Self {
        Self {
            profile: PublicProfile::from(scored.profile),
            compatibility_score: scored.compatibility_score,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Bare liveness status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Plain message response, optionally timestamped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
