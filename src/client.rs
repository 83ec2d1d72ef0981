use reqwest::Client;
use thiserror::Error;

use crate::config::{ClientConfig, ConfigError};
use crate::models::{quote::PriceQuote, response::ApiResponse, token::Token};

/// Shown in place of the whole swap surface when the catalog cannot be
/// loaded.
pub const TOKENS_LOAD_ERROR: &str =
    "Failed to load tokens. Please check that the environment variables have been set correctly.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("No price data received")]
    MissingData,
}

/// Thin client for the token API, addressed through a configured base URL.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ClientConfig::from_env()?;

        Ok(Self::new(&config.base_url))
    }

    pub async fn get_token_list(&self) -> Result<Vec<Token>, ApiError> {
        let url = format!("{}/tokens/list", self.base_url);
        let response: ApiResponse<Vec<Token>> =
            self.client.get(&url).send().await?.json().await?;

        if !response.success {
            return Err(ApiError::Api(
                response
                    .error
                    .unwrap_or_else(|| "Failed to fetch token list".to_string()),
            ));
        }

        Ok(response.data.unwrap_or_default())
    }

    pub async fn get_token_price(
        &self,
        address: &str,
        chain_id: u64,
    ) -> Result<PriceQuote, ApiError> {
        let url = format!("{}/tokens/price", self.base_url);
        let response: ApiResponse<PriceQuote> = self
            .client
            .get(&url)
            .query(&[("address", address), ("chainId", &chain_id.to_string())])
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ApiError::Api(
                response
                    .error
                    .unwrap_or_else(|| "Failed to fetch token price".to_string()),
            ));
        }

        response.data.ok_or(ApiError::MissingData)
    }

    /// Looks up both sides of a pair at once. The lookups are independent;
    /// either may fail or finish first without affecting the other.
    pub async fn get_pair_prices(
        &self,
        source: &Token,
        target: &Token,
    ) -> (
        Result<PriceQuote, ApiError>,
        Result<PriceQuote, ApiError>,
    ) {
        tokio::join!(
            self.get_token_price(&source.address, source.chain_id),
            self.get_token_price(&target.address, target.chain_id),
        )
    }
}
