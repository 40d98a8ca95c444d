use serde::Serialize;
use std::fmt;

use crate::nav::query_param;
use crate::CommerceError;

/// A payable amount: finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, CommerceError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CommerceError::InvalidAmount(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parse the whole string as a number. Trailing garbage ("12abc") is
    /// rejected.
    pub fn parse(raw: &str) -> Result<Self, CommerceError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| CommerceError::InvalidAmount(raw.to_string()))?;
        Self::new(value).map_err(|_| CommerceError::InvalidAmount(raw.to_string()))
    }

    /// Read the `amount` parameter of a payment query string.
    pub fn from_query(query: &str) -> Result<Self, CommerceError> {
        let raw = query_param(query, "amount")
            .ok_or_else(|| CommerceError::InvalidAmount(String::new()))?;
        Self::parse(raw)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Route;

    #[test]
    fn test_parse_accepts_plain_numbers() {
        assert_eq!(Amount::parse("500000").unwrap().value(), 500000.0);
        assert_eq!(Amount::parse(" 1234.5 ").unwrap().value(), 1234.5);
    }

    #[test]
    fn test_parse_rejects_unusable_values() {
        for raw in ["abc", "", "12abc", "NaN", "inf", "0", "-5"] {
            assert!(
                matches!(Amount::parse(raw), Err(CommerceError::InvalidAmount(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_amount_survives_payment_route() {
        let path = Route::Payment { amount: 1234.5 }.to_path();
        let (_, query) = path.split_once('?').unwrap();
        assert_eq!(Amount::from_query(query).unwrap().value(), 1234.5);
    }

    #[test]
    fn test_from_query_without_amount() {
        assert!(Amount::from_query("?foo=1").is_err());
    }
}
