use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3002 }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age_secs: usize,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            max_age_secs: default_cors_max_age(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "https://blindl-blindls-projects.vercel.app".to_string(),
        "http://localhost:3000".to_string(),
    ]
}
fn default_cors_max_age() -> usize { 600 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSettings {
    /// JSON array of profiles loaded at startup
    pub seed_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> usize { 10 }
fn default_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_age_weight")]
    pub age: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_relationship_goals_weight")]
    pub relationship_goals: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_hobbies_weight")]
    pub hobbies: f64,
    #[serde(default = "default_languages_weight")]
    pub languages: f64,
    #[serde(default = "default_smoking_weight")]
    pub smoking: f64,
    #[serde(default = "default_drinking_weight")]
    pub drinking: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            age: default_age_weight(),
            location: default_location_weight(),
            relationship_goals: default_relationship_goals_weight(),
            interests: default_interests_weight(),
            hobbies: default_hobbies_weight(),
            languages: default_languages_weight(),
            smoking: default_smoking_weight(),
            drinking: default_drinking_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            age: config.age,
            location: config.location,
            relationship_goals: config.relationship_goals,
            interests: config.interests,
            hobbies: config.hobbies,
            languages: config.languages,
            smoking: config.smoking,
            drinking: config.drinking,
        }
    }
}

impl WeightsConfig {
    /// Reject weights that would make scores meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("age", self.age),
            ("location", self.location),
            ("relationship_goals", self.relationship_goals),
            ("interests", self.interests),
            ("hobbies", self.hobbies),
            ("languages", self.languages),
            ("smoking", self.smoking),
            ("drinking", self.drinking),
        ];

        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::Message(format!(
                    "scoring.weights.{} must be a finite non-negative number, got {}",
                    name, weight
                )));
            }
        }

        Ok(())
    }
}

fn default_age_weight() -> f64 { 10.0 }
fn default_location_weight() -> f64 { 10.0 }
fn default_relationship_goals_weight() -> f64 { 15.0 }
fn default_interests_weight() -> f64 { 20.0 }
fn default_hobbies_weight() -> f64 { 15.0 }
fn default_languages_weight() -> f64 { 10.0 }
fn default_smoking_weight() -> f64 { 10.0 }
fn default_drinking_weight() -> f64 { 10.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local configuration file (config/local.toml)
    /// 4. Environment variables (prefixed with BLINDL_)
    /// 5. Bare `PORT` and `FRONTEND_URL` as used by hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BLINDL__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        apply_platform_env(
            &mut settings,
            std::env::var("PORT").ok(),
            std::env::var("FRONTEND_URL").ok(),
        )?;
        settings.scoring.weights.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.scoring.weights.validate()?;
        Ok(settings)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("BLINDL")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}

/// Apply the unprefixed variables hosting platforms inject
fn apply_platform_env(
    settings: &mut Settings,
    port: Option<String>,
    frontend_url: Option<String>,
) -> Result<(), ConfigError> {
    if let Some(port) = port {
        settings.server.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;
    }

    if let Some(url) = frontend_url.filter(|url| !url.is_empty()) {
        if !settings.cors.allowed_origins.contains(&url) {
            settings.cors.allowed_origins.push(url);
        }
    }

    Ok(())
}
