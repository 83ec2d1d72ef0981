use super::chains::{BASE, ETHEREUM, POLYGON};

// Shared-cache lifetimes advertised on API responses, in seconds.
pub const TOKENS_CACHE_TTL: u64 = 300;
pub const PRICE_CACHE_TTL: u64 = 60;

pub const MAX_USD_AMOUNT: f64 = 1_000_000.0;

pub struct TokenEntry {
    pub id: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub chain_id: u64,
    pub decimals: u8,
}

pub const SUPPORTED_TOKENS: [TokenEntry; 4] = [
    TokenEntry {
        id: "usdc-1",
        symbol: "USDC",
        name: "USD Coin",
        address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
        chain_id: ETHEREUM,
        decimals: 6,
    },
    TokenEntry {
        id: "usdt-137",
        symbol: "USDT",
        name: "Tether USD",
        address: "0xc2132D05D31c914a87C6611C10748AEb04B58e8F",
        chain_id: POLYGON,
        decimals: 6,
    },
    TokenEntry {
        id: "eth-8453",
        symbol: "ETH",
        name: "Ethereum",
        address: "0x4200000000000000000000000000000000000006",
        chain_id: BASE,
        decimals: 18,
    },
    TokenEntry {
        id: "wbtc-1",
        symbol: "WBTC",
        name: "Wrapped Bitcoin",
        address: "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599",
        chain_id: ETHEREUM,
        decimals: 8,
    },
];
