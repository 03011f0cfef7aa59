use url::Url;

use crate::error::{AppError, Result};

pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const GEMINI_API_BASE: &str = "GEMINI_API_BASE";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const REQUIRED_KEYS: [&str; 3] = [GOOGLE_API_KEY, SPOTIFY_CLIENT_ID, SPOTIFY_CLIENT_SECRET];

#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub gemini_model: String,
    pub gemini_api_base: Url,
}

impl Config {
    /// Load credentials from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as missing, and every
    /// missing required key is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing = Self::missing_keys(&get);
        if !missing.is_empty() {
            return Err(AppError::Config(format!("missing {}", missing.join(", "))));
        }

        let gemini_api_base = get(GEMINI_API_BASE)
            .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string());
        let gemini_api_base = Url::parse(&gemini_api_base)
            .map_err(|e| AppError::Config(format!("Invalid {}: {}", GEMINI_API_BASE, e)))?;

        Ok(Self {
            google_api_key: get(GOOGLE_API_KEY).unwrap_or_default(),
            spotify_client_id: get(SPOTIFY_CLIENT_ID).unwrap_or_default(),
            spotify_client_secret: get(SPOTIFY_CLIENT_SECRET).unwrap_or_default(),
            gemini_model: get(GEMINI_MODEL).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base,
        })
    }

    pub fn missing_keys<F>(lookup: F) -> Vec<&'static str>
    where
        F: Fn(&str) -> Option<String>,
    {
        REQUIRED_KEYS
            .into_iter()
            .filter(|key| lookup(*key).is_none_or(|value| value.trim().is_empty()))
            .collect()
    }
}
