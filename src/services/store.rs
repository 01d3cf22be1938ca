use crate::models::{Profile, ProfileId};
use std::sync::RwLock;
use thiserror::Error;

/// Errors that can occur with profile store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Profile store lock poisoned")]
    Poisoned,

    #[error("Invalid profile: {0}")]
    InvalidProfile(#[from] serde_json::Error),
}

/// Transformation applied to a stored profile by [`ProfileStore::update`]
pub type ProfileUpdate<'a> = Box<dyn FnOnce(&Profile) -> Result<Profile, StoreError> + 'a>;

/// Profile storage seam used by the HTTP handlers
///
/// The matching engine never sees this trait; handlers take a snapshot with
/// `list` and hand the slice to the matcher.
pub trait ProfileStore: Send + Sync {
    fn get(&self, id: &ProfileId) -> Result<Option<Profile>, StoreError>;
    fn list(&self) -> Result<Vec<Profile>, StoreError>;
    /// Insert a new profile or replace the one with the same id
    fn upsert(&self, profile: Profile) -> Result<Profile, StoreError>;

    /// Replace the profile matching `key` with `apply(current)` in one step.
    ///
    /// Returns `Ok(None)` when no profile matches. Concurrent updates to the
    /// same profile must not overwrite each other.
    fn update(&self, key: &str, apply: ProfileUpdate<'_>) -> Result<Option<Profile>, StoreError>;

    /// Look up a profile by the textual form of its id (e.g. a path segment)
    fn find(&self, key: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|profile| profile.id.matches_key(key)))
    }
}

/// In-memory profile store
///
/// Keeps profiles in insertion order so match ties stay deterministic.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<Vec<Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, id: &ProfileId) -> Result<Option<Profile>, StoreError> {
        let guard = self.profiles.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.iter().find(|profile| &profile.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Profile>, StoreError> {
        let guard = self.profiles.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn upsert(&self, profile: Profile) -> Result<Profile, StoreError> {
        let mut guard = self.profiles.write().map_err(|_| StoreError::Poisoned)?;
        match guard.iter_mut().find(|existing| existing.id == profile.id) {
            Some(existing) => *existing = profile.clone(),
            None => guard.push(profile.clone()),
        }
        tracing::trace!("Upserted profile {} ({} stored)", profile.id, guard.len());
        Ok(profile)
    }

    fn update(&self, key: &str, apply: ProfileUpdate<'_>) -> Result<Option<Profile>, StoreError> {
        let mut guard = self.profiles.write().map_err(|_| StoreError::Poisoned)?;
        let Some(existing) = guard.iter_mut().find(|profile| profile.id.matches_key(key)) else {
            return Ok(None);
        };
        let updated = apply(existing)?;
        *existing = updated.clone();
        Ok(Some(updated))
    }
}
