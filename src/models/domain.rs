use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Profile identifier as it appears on the wire: either a string or an integer.
///
/// Equality is strict, so `"1"` and `1` are different profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileId {
    Number(i64),
    Text(String),
}

impl ProfileId {
    /// Compare against a textual key such as a URL path segment
    pub fn matches_key(&self, key: &str) -> bool {
        match self {
            ProfileId::Text(id) => id == key,
            ProfileId::Number(id) => key.parse::<i64>().map_or(false, |k| k == *id),
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::Number(id) => write!(f, "{}", id),
            ProfileId::Text(id) => f.write_str(id),
        }
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        ProfileId::Text(value.to_string())
    }
}

impl From<String> for ProfileId {
    fn from(value: String) -> Self {
        ProfileId::Text(value)
    }
}

impl From<i64> for ProfileId {
    fn from(value: i64) -> Self {
        ProfileId::Number(value)
    }
}

/// Dating profile record
///
/// Only the fields the matching engine reads are typed. Everything else
/// (name, bio, photos, credentials, ...) rides along in `extra` untouched.
/// Typed fields are parsed leniently: a value of the wrong shape is kept
/// verbatim in `extra` under its own key, so it scores as absent but is
/// serialized back exactly as it came in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Profile {
    pub id: ProfileId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "lookingFor", skip_serializing_if = "Option::is_none")]
    pub looking_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "relationshipGoals", skip_serializing_if = "Option::is_none")]
    pub relationship_goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drinking: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    /// Bare profile with only an id set
    pub fn new(id: impl Into<ProfileId>) -> Self {
        Self {
            id: id.into(),
            gender: None,
            looking_for: None,
            age: None,
            location: None,
            relationship_goals: None,
            interests: None,
            hobbies: None,
            languages: None,
            smoking: None,
            drinking: None,
            extra: Map::new(),
        }
    }

    /// Shallow-merge `patch` over this profile's JSON form.
    ///
    /// Keys in the patch replace existing keys wholesale. The id is never
    /// changed by a patch.
    pub fn merged(&self, mut patch: Map<String, Value>) -> Result<Profile, serde_json::Error> {
        patch.remove("id");

        let mut fields = match serde_json::to_value(self)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        fields.extend(patch);
        fields.insert("id".to_string(), serde_json::to_value(&self.id)?);

        Profile::try_from(fields)
    }
}

impl TryFrom<Map<String, Value>> for Profile {
    type Error = serde_json::Error;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let id: ProfileId = match fields.remove("id") {
            Some(raw) => serde_json::from_value(raw)?,
            None => return Err(serde::de::Error::missing_field("id")),
        };

        let mut profile = Profile::new(id);
        profile.gender = take_typed(&mut fields, "gender", lenient_label);
        profile.looking_for = take_typed(&mut fields, "lookingFor", lenient_label);
        profile.age = take_typed(&mut fields, "age", lenient_age);
        profile.location = take_typed(&mut fields, "location", lenient_label);
        profile.relationship_goals = take_typed(&mut fields, "relationshipGoals", lenient_label);
        profile.interests = take_typed(&mut fields, "interests", lenient_labels);
        profile.hobbies = take_typed(&mut fields, "hobbies", lenient_labels);
        profile.languages = take_typed(&mut fields, "languages", lenient_labels);
        profile.smoking = take_typed(&mut fields, "smoking", lenient_label);
        profile.drinking = take_typed(&mut fields, "drinking", lenient_label);
        // Whatever is left, including rejected typed values, passes through
        profile.extra = fields;
        Ok(profile)
    }
}

/// Pull `key` out of `fields` if `parse` accepts it, otherwise leave the raw
/// value where it was
fn take_typed<T>(
    fields: &mut Map<String, Value>,
    key: &str,
    parse: fn(&Value) -> Option<T>,
) -> Option<T> {
    let parsed = parse(fields.get(key)?)?;
    fields.remove(key);
    Some(parsed)
}

fn lenient_label(value: &Value) -> Option<String> {
    match value {
        Value::String(label) if !label.is_empty() => Some(label.clone()),
        _ => None,
    }
}

fn lenient_labels(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => items.iter().map(|item| item.as_str().map(str::to_string)).collect(),
        _ => None,
    }
}

fn lenient_age(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|age| u32::try_from(age).ok())
}

/// Candidate profile paired with its compatibility score against the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProfile {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: f64,
}

/// Maximum contribution of each criterion to the compatibility score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub age: f64,
    pub location: f64,
    pub relationship_goals: f64,
    pub interests: f64,
    pub hobbies: f64,
    pub languages: f64,
    pub smoking: f64,
    pub drinking: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.age
            + self.location
            + self.relationship_goals
            + self.interests
            + self.hobbies
            + self.languages
            + self.smoking
            + self.drinking
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            age: 10.0,
            location: 10.0,
            relationship_goals: 15.0,
            interests: 20.0,
            hobbies: 15.0,
            languages: 10.0,
            smoking: 10.0,
            drinking: 10.0,
        }
    }
}
