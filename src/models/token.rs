use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::chains::chain_name;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub address: String,
    pub chain_id: u64,
    pub decimals: u8,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) on {}",
            self.symbol,
            self.name,
            chain_name(self.chain_id)
        )
    }
}
