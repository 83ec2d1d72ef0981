use serde::{Deserialize, Serialize};

pub const QUOTE_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price: f64,
    pub timestamp: u64,
    pub currency: String,
}

impl PriceQuote {
    pub fn new(price: f64, timestamp: u64) -> Self {
        PriceQuote {
            price,
            timestamp,
            currency: QUOTE_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwapQuote {
    pub usd_amount: f64,
    pub source_amount: f64,
    pub target_amount: f64,
    pub exchange_rate: f64,
}
