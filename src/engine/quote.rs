use crate::models::quote::{PriceQuote, SwapQuote};

/// Derives the implied token amounts and exchange rate for a USD amount.
///
/// The rate is expressed source-per-target: one unit of the source token is
/// worth `exchange_rate` units of the target token. Missing inputs yield no
/// quote, never an error.
pub fn compute_quote(
    usd_amount: f64,
    source_price: Option<&PriceQuote>,
    target_price: Option<&PriceQuote>,
) -> Option<SwapQuote> {
    if !usd_amount.is_finite() || usd_amount <= 0.0 {
        return None;
    }

    let source_price = source_price?;
    let target_price = target_price?;

    Some(SwapQuote {
        usd_amount,
        source_amount: usd_amount / source_price.price,
        target_amount: usd_amount / target_price.price,
        exchange_rate: source_price.price / target_price.price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(value: f64) -> PriceQuote {
        PriceQuote::new(value, 0)
    }

    #[test]
    fn test_quote_invariants() {
        let usdc = price(1.0);
        let eth = price(2500.0);

        let quote = compute_quote(1000.0, Some(&usdc), Some(&eth)).unwrap();

        assert_eq!(quote.usd_amount, 1000.0);
        assert_eq!(quote.source_amount, 1000.0);
        assert_eq!(quote.target_amount, 0.4);
        assert_eq!(quote.exchange_rate, 0.0004);
    }

    #[test]
    fn test_rate_relates_amounts() {
        let cases = [
            (250.0, 1.0003, 2491.37),
            (1_000_000.0, 63_200.5, 0.017),
            (0.01, 12.75, 3.33),
        ];

        for (usd, source, target) in cases {
            let quote = compute_quote(usd, Some(&price(source)), Some(&price(target))).unwrap();

            assert!((quote.source_amount - usd / source).abs() < 1e-9);
            assert!((quote.target_amount - usd / target).abs() < 1e-9);
            assert!(
                (quote.source_amount * quote.exchange_rate - quote.target_amount).abs()
                    < quote.target_amount.abs() * 1e-12
            );
        }
    }

    #[test]
    fn test_no_quote_without_positive_amount() {
        let source = price(1.0);
        let target = price(2500.0);

        assert_eq!(compute_quote(0.0, Some(&source), Some(&target)), None);
        assert_eq!(compute_quote(-10.0, Some(&source), Some(&target)), None);
        assert_eq!(compute_quote(f64::NAN, Some(&source), Some(&target)), None);
        assert_eq!(
            compute_quote(f64::INFINITY, Some(&source), Some(&target)),
            None
        );
    }

    #[test]
    fn test_no_quote_without_both_prices() {
        let source = price(1.0);

        assert_eq!(compute_quote(100.0, Some(&source), None), None);
        assert_eq!(compute_quote(100.0, None, Some(&source)), None);
        assert_eq!(compute_quote(100.0, None, None), None);
    }
}
