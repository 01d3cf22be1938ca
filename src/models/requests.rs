use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Query string for the matches endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchesQuery {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u16>,
}

/// Free-form profile body used by create and update
///
/// Any JSON object is accepted; typed fields are picked out when the body is
/// turned into a `Profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfilePayload {
    pub fields: Map<String, Value>,
}

impl ProfilePayload {
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}
