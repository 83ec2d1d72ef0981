pub const ETHEREUM: u64 = 1;
pub const POLYGON: u64 = 137;
pub const BASE: u64 = 8453;

pub struct ChainInfo {
    pub name: &'static str,
    pub id: u64,
}

pub const CHAIN_INFO: [ChainInfo; 3] = [
    ChainInfo {
        name: "Ethereum",
        id: ETHEREUM,
    },
    ChainInfo {
        name: "Polygon",
        id: POLYGON,
    },
    ChainInfo {
        name: "Base",
        id: BASE,
    },
];

pub fn chain_name(chain_id: u64) -> String {
    CHAIN_INFO
        .iter()
        .find(|chain| chain.id == chain_id)
        .map(|chain| chain.name.to_string())
        .unwrap_or_else(|| format!("Chain {}", chain_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_name_known() {
        assert_eq!(chain_name(1), "Ethereum");
        assert_eq!(chain_name(137), "Polygon");
        assert_eq!(chain_name(8453), "Base");
    }

    #[test]
    fn test_chain_name_unknown() {
        assert_eq!(chain_name(42161), "Chain 42161");
    }
}
