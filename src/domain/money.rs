use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary amounts and rates are arbitrary-precision decimals, stored
/// exactly as entered. Rounding happens only at display time, never on the
/// stored value, so a charge of "12.345" keeps all three digits.
pub type Amount = Decimal;

/// Parse a raw text amount into an [`Amount`].
///
/// The whole trimmed string must be a decimal literal; negatives and any
/// number of decimal digits are accepted. Example: "12.50" -> 12.50,
/// "-3" -> -3, "0.125" -> 0.125. Empty input and anything that is not a
/// plain decimal number (including exponent forms) are errors. `Decimal`
/// cannot represent NaN or infinity, so whatever parses is finite.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    input.parse().map_err(|_| ParseAmountError::InvalidFormat)
}

/// Parse a raw text amount, falling back to zero when it does not parse.
///
/// This is the tax/fee input policy: a non-numeric entry resets the field
/// to 0 rather than keeping the previous value. Negative zero normalizes
/// to plain zero.
pub fn parse_amount_or_zero(input: &str) -> Amount {
    match parse_amount(input) {
        Ok(amount) if !amount.is_zero() => amount,
        _ => Amount::ZERO,
    }
}

/// Format an amount for display with exactly two decimal places.
/// Example: 14 -> "14.00", 3.333... -> "3.33", -1.005 -> "-1.01".
pub fn format_amount(amount: Amount) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "empty amount"),
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
