use tracing::info;

/// Base URL of the public PokeAPI.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Environment variable that points the client at another PokeAPI host
pub const API_BASE_URL_VAR: &str = "POKEDEX_API_BASE_URL";

/// Application configuration
/// In debug builds: loads from .env file, then the process environment
/// In release builds: process environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// PokeAPI base URL without a trailing slash
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using process environment");
            }
        }

        let config = Self::from_env_vars(|key| std::env::var(key).ok());
        info!("Config: PokeAPI base URL: {}", config.api_base_url);
        config
    }

    /// Build configuration from a variable lookup.
    pub fn from_env_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_BASE_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self { api_base_url }
    }
}
