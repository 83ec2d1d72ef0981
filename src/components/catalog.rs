use crate::config::tokens::SUPPORTED_TOKENS;
use crate::models::token::Token;

/// The fixed set of supported tokens, built once at startup and shared
/// read-only.
#[derive(Debug, Clone)]
pub struct TokenCatalog {
    list: Vec<Token>,
}

impl TokenCatalog {
    pub fn new() -> Self {
        let list = SUPPORTED_TOKENS
            .iter()
            .map(|entry| Token {
                id: entry.id.to_string(),
                symbol: entry.symbol.to_string(),
                name: entry.name.to_string(),
                address: entry.address.to_string(),
                chain_id: entry.chain_id,
                decimals: entry.decimals,
            })
            .collect();

        TokenCatalog { list }
    }

    pub fn list(&self) -> &[Token] {
        &self.list
    }

    // Addresses arrive in mixed checksum and lowercase forms, so comparison
    // ignores case.
    pub fn find(&self, address: &str, chain_id: u64) -> Option<&Token> {
        self.list
            .iter()
            .find(|t| t.chain_id == chain_id && t.address.eq_ignore_ascii_case(address))
    }

}

impl Default for TokenCatalog {
    fn default() -> Self {
        Self::new()
    }
}
