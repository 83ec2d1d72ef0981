use thiserror::Error;

use crate::config::tokens::MAX_USD_AMOUNT;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    #[error("Please enter a valid number")]
    NotANumber,
    #[error("Amount must be greater than 0")]
    NotPositive,
    #[error("Amount too large")]
    TooLarge,
}

/// Semantic check of a complete amount string. Empty input means "not yet
/// entered" and is not an error.
pub fn validate_amount(raw: &str) -> Result<Option<f64>, AmountError> {
    if raw.is_empty() {
        return Ok(None);
    }

    let value: f64 = raw.parse().map_err(|_| AmountError::NotANumber)?;

    if value.is_nan() {
        return Err(AmountError::NotANumber);
    }
    if value <= 0.0 {
        return Err(AmountError::NotPositive);
    }
    if value > MAX_USD_AMOUNT {
        return Err(AmountError::TooLarge);
    }

    Ok(Some(value))
}

/// Entry-time shape of an amount string: digits with at most one decimal
/// point, at most two fraction digits, no second leading zero.
pub fn is_well_formed(candidate: &str) -> bool {
    if candidate.is_empty() {
        return true;
    }
    if !candidate
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.')
    {
        return false;
    }
    if candidate.matches('.').count() > 1 {
        return false;
    }
    if candidate.starts_with("00") {
        return false;
    }
    if let Some((_, fraction)) = candidate.split_once('.') {
        if fraction.len() > 2 {
            return false;
        }
    }

    true
}

/// Folds keystrokes into `current`, dropping any key that would leave the
/// field ill-formed.
pub fn apply_keystrokes(current: &str, keys: &str) -> String {
    let mut value = current.to_string();

    for key in keys.chars() {
        let mut candidate = value.clone();
        candidate.push(key);

        if is_well_formed(&candidate) {
            value = candidate;
        }
    }

    value
}
