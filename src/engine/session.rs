use crate::engine::{
    amount::{apply_keystrokes, validate_amount, AmountError},
    format::{format_pair_rate, format_token_amount, format_usd},
    quote::compute_quote,
};
use crate::models::{quote::PriceQuote, quote::SwapQuote, token::Token};

pub const SELECT_TOKENS_HINT: &str = "Select both tokens to enable swap calculations.";
pub const ENTER_AMOUNT_HINT: &str = "Enter a valid amount to see calculations";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

/// Selection state for one swap screen. Every token change bumps the
/// generation counter; price results carry the generation they were requested
/// under and are dropped on mismatch, so the newest selection always wins over
/// lookups still in flight.
#[derive(Debug, Default)]
pub struct QuoteSession {
    generation: u64,
    source: Option<Token>,
    target: Option<Token>,
    amount: String,
    source_price: Option<PriceQuote>,
    target_price: Option<PriceQuote>,
}

impl QuoteSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Replaces one side of the pair. Returns the new generation to attach to
    /// the price lookup for this selection.
    pub fn select(&mut self, side: Side, token: Option<Token>) -> u64 {
        self.generation += 1;

        match side {
            Side::Source => {
                self.source = token;
                self.source_price = None;
            }
            Side::Target => {
                self.target = token;
                self.target_price = None;
            }
        }

        self.generation
    }

    /// Replaces the amount field with `raw` passed through the keystroke
    /// filter, as if typed from an empty field.
    pub fn set_amount(&mut self, raw: &str) {
        self.amount = apply_keystrokes("", raw);
    }

    pub fn type_amount(&mut self, keys: &str) {
        self.amount = apply_keystrokes(&self.amount, keys);
    }

    /// Records a resolved price lookup. Results from a superseded selection
    /// are ignored; returns whether the result was kept.
    pub fn record_price(&mut self, generation: u64, side: Side, quote: PriceQuote) -> bool {
        if generation != self.generation {
            return false;
        }

        match side {
            Side::Source => self.source_price = Some(quote),
            Side::Target => self.target_price = Some(quote),
        }

        true
    }

    pub fn amount_error(&self) -> Option<AmountError> {
        validate_amount(&self.amount).err()
    }

    pub fn quote(&self) -> Option<SwapQuote> {
        let usd_amount = validate_amount(&self.amount).ok().flatten()?;

        compute_quote(
            usd_amount,
            self.source_price.as_ref(),
            self.target_price.as_ref(),
        )
    }

    /// The guidance line shown instead of a quote block, if any.
    pub fn guidance(&self) -> Option<&'static str> {
        if self.source.is_none() || self.target.is_none() {
            return Some(SELECT_TOKENS_HINT);
        }
        if self.quote().is_none() {
            return Some(ENTER_AMOUNT_HINT);
        }

        None
    }

    /// The quote block lines, once both tokens are selected and a quote is
    /// computable.
    pub fn summary(&self) -> Option<Vec<String>> {
        let quote = self.quote()?;
        let source = self.source.as_ref()?;
        let target = self.target.as_ref()?;

        Some(vec![
            format!("USD Amount: ${}", format_usd(quote.usd_amount)),
            format!(
                "{} Amount: {}",
                source.symbol,
                format_token_amount(quote.source_amount, source.decimals)
            ),
            format!(
                "{} Amount: {}",
                target.symbol,
                format_token_amount(quote.target_amount, target.decimals)
            ),
            format_pair_rate(quote.exchange_rate, source, target),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(id: &str, symbol: &str, chain_id: u64, decimals: u8) -> Token {
        Token {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            address: format!("0x{}", id),
            chain_id,
            decimals,
        }
    }

    fn usdc() -> Token {
        token("usdc-1", "USDC", 1, 6)
    }

    fn eth() -> Token {
        token("eth-8453", "ETH", 8453, 18)
    }

    #[test]
    fn test_guidance_until_both_tokens_selected() {
        let mut session = QuoteSession::new();
        assert_eq!(session.guidance(), Some(SELECT_TOKENS_HINT));
        assert_eq!(session.summary(), None);

        session.select(Side::Source, Some(usdc()));
        assert_eq!(session.guidance(), Some(SELECT_TOKENS_HINT));
        assert_eq!(session.summary(), None);

        session.select(Side::Target, Some(eth()));
        assert_eq!(session.guidance(), Some(ENTER_AMOUNT_HINT));
    }

    #[test]
    fn test_summary_lines() {
        let mut session = QuoteSession::new();
        let source_gen = session.select(Side::Source, Some(usdc()));
        let target_gen = session.select(Side::Target, Some(eth()));
        session.set_amount("1000");

        // The source lookup was requested before the target selection bumped
        // the generation, so its result no longer applies.
        assert!(!session.record_price(source_gen, Side::Source, PriceQuote::new(1.0, 0)));
        let generation = session.generation();
        assert!(session.record_price(generation, Side::Source, PriceQuote::new(1.0, 0)));
        assert!(session.record_price(target_gen, Side::Target, PriceQuote::new(2500.0, 0)));

        assert_eq!(session.guidance(), None);
        assert_eq!(
            session.summary().unwrap(),
            vec![
                "USD Amount: $1000.00",
                "USDC Amount: 1000.00",
                "ETH Amount: 0.400000",
                "1 USDC = 0.000400 ETH",
            ]
        );
    }

    #[test]
    fn test_stale_price_is_discarded() {
        let mut session = QuoteSession::new();
        session.select(Side::Source, Some(usdc()));
        let stale = session.select(Side::Target, Some(eth()));
        session.set_amount("100");

        // The user re-picks the target before the first lookup resolves.
        let fresh = session.select(Side::Target, Some(token("wbtc-1", "WBTC", 1, 8)));

        assert!(!session.record_price(stale, Side::Target, PriceQuote::new(2500.0, 0)));
        assert_eq!(session.quote(), None);

        assert!(session.record_price(fresh, Side::Source, PriceQuote::new(1.0, 0)));
        assert!(session.record_price(fresh, Side::Target, PriceQuote::new(64000.0, 0)));
        let quote = session.quote().unwrap();
        assert!((quote.exchange_rate - 1.0 / 64000.0).abs() < 1e-12);
    }

    #[test]
    fn test_selection_change_clears_only_that_side() {
        let mut session = QuoteSession::new();
        session.select(Side::Source, Some(usdc()));
        session.select(Side::Target, Some(eth()));
        session.set_amount("50");

        let generation = session.generation();
        session.record_price(generation, Side::Source, PriceQuote::new(1.0, 0));
        session.record_price(generation, Side::Target, PriceQuote::new(2500.0, 0));
        assert!(session.quote().is_some());

        let generation = session.select(Side::Target, Some(token("usdt-137", "USDT", 137, 6)));
        assert_eq!(session.quote(), None);

        session.record_price(generation, Side::Target, PriceQuote::new(1.0, 0));
        assert!(session.quote().is_some());
    }

    #[test]
    fn test_invalid_amount_blocks_quote_but_keeps_field_error() {
        let mut session = QuoteSession::new();
        session.select(Side::Source, Some(usdc()));
        session.select(Side::Target, Some(eth()));
        let generation = session.generation();
        session.record_price(generation, Side::Source, PriceQuote::new(1.0, 0));
        session.record_price(generation, Side::Target, PriceQuote::new(2500.0, 0));

        session.set_amount("0");
        assert_eq!(session.amount_error(), Some(AmountError::NotPositive));
        assert_eq!(session.quote(), None);
        assert_eq!(session.guidance(), Some(ENTER_AMOUNT_HINT));

        session.set_amount("1000");
        assert_eq!(session.amount_error(), None);
        assert!(session.quote().is_some());
    }

    #[test]
    fn test_typed_amount_is_shaped() {
        let mut session = QuoteSession::new();
        session.type_amount("100.555");
        assert_eq!(session.amount(), "100.55");

        session.set_amount("00");
        assert_eq!(session.amount(), "0");
    }
}
