use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::config::tokens::PRICE_CACHE_TTL;
use crate::models::quote::PriceQuote;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("price API returned status {0}")]
    Status(u16),
    #[error("malformed price payload: {0}")]
    Malformed(String),
}

/// Client for the upstream unit-price provider. Successful quotes are held in
/// a short-lived in-memory cache so repeated lookups inside the freshness
/// window skip the network.
pub struct PriceService {
    client: Client,
    api_url: String,
    api_key: String,
    cache: RwLock<HashMap<String, PriceQuote>>,
}

impl PriceService {
    pub fn new(api_url: &str, api_key: &str) -> Result<Self, PriceError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(PriceService {
            client,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            cache: RwLock::new(HashMap::new()),
        })
    }

    pub async fn get_price(&self, address: &str, chain_id: u64) -> Result<PriceQuote, PriceError> {
        let key = cache_key(address, chain_id);

        if let Some(hit) = self.cache.read().await.get(&key) {
            if now_millis().saturating_sub(hit.timestamp) < PRICE_CACHE_TTL * 1000 {
                return Ok(hit.clone());
            }
        }

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&json!({ "address": address, "chainId": chain_id }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PriceError::Status(response.status().as_u16()));
        }

        let payload: Value = response.json().await?;
        let price = parse_price_payload(&payload)?;
        let quote = PriceQuote::new(price, now_millis());

        self.cache.write().await.insert(key, quote.clone());

        Ok(quote)
    }
}

// Addresses are compared case-insensitively, so the cache key lowercases them.
fn cache_key(address: &str, chain_id: u64) -> String {
    format!("{}-{}", address.to_lowercase(), chain_id)
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}

fn parse_price_payload(payload: &Value) -> Result<f64, PriceError> {
    let price = payload
        .get("price")
        .and_then(Value::as_f64)
        .ok_or_else(|| PriceError::Malformed(payload.to_string()))?;

    if price <= 0.0 {
        return Err(PriceError::Malformed(payload.to_string()));
    }

    Ok(price)
}
