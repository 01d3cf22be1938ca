use crate::models::Profile;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading seed profiles
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load profiles from a JSON file holding an array of profile objects
pub async fn load_seed_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<Profile>, SeedError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: shown.clone(),
            source,
        })?;

    let profiles: Vec<Profile> =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: shown.clone(),
            source,
        })?;

    tracing::info!("Loaded {} seed profiles from {}", profiles.len(), shown);
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_seed_profiles() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "1", "gender": "Male", "lookingFor": "Female", "password": "test123"}},
                {{"id": 2, "gender": "Female", "lookingFor": "Male", "interests": "Art, Music"}}
            ]"#
        )
        .unwrap();

        let profiles = load_seed_profiles(file.path()).await.unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[1].interests, None);
        assert!(profiles[0].extra.contains_key("password"));
    }

    #[tokio::test]
    async fn test_missing_seed_file() {
        let err = load_seed_profiles("/nonexistent/profiles.json").await.unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"not\": \"an array\"}}").unwrap();

        let err = load_seed_profiles(file.path()).await.unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
    }
}
