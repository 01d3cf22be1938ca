// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, ProfileId, ScoredProfile, ScoringWeights};
pub use requests::{MatchesQuery, ProfilePayload};
pub use responses::{
    ErrorResponse, HealthResponse, MessageResponse, PublicMatch, PublicProfile, StatusResponse,
    SENSITIVE_FIELDS,
};
