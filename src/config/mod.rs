use std::env;

use thiserror::Error;

pub mod chains;
pub mod tokens;

pub const DEFAULT_PRICE_API_URL: &str = "https://api.funkit.io/v1/assets/price";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub price_api_key: String,
    pub price_api_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .map_err(|_| ConfigError::MissingVar("PORT"))?
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidVar("PORT", e.to_string()))?;
        let price_api_key =
            env::var("PRICE_API_KEY").map_err(|_| ConfigError::MissingVar("PRICE_API_KEY"))?;
        let price_api_url =
            env::var("PRICE_API_URL").unwrap_or_else(|_| DEFAULT_PRICE_API_URL.to_string());

        Ok(ServerConfig {
            port,
            price_api_key,
            price_api_url,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            env::var("API_BASE_URL").map_err(|_| ConfigError::MissingVar("API_BASE_URL"))?;

        Ok(ClientConfig { base_url })
    }
}
