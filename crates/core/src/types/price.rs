//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts are held as [`Decimal`] in the currency's standard unit (dollars,
/// baht), never as floating point. Catalog base prices are denominated in the
/// reference currency ([`CurrencyCode::USD`]); conversion into a display
/// currency is the locale layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }
}

/// ISO 4217 currency codes for the supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// United States dollar (the reference currency).
    #[default]
    USD,
    /// Thai baht. No minor units are displayed for this currency.
    THB,
}

impl CurrencyCode {
    /// The ISO 4217 code as a string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::THB => "THB",
        }
    }

    /// The currency symbol used in formatted prices.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::THB => "฿",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_accessors() {
        assert_eq!(CurrencyCode::USD.code(), "USD");
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::THB.code(), "THB");
        assert_eq!(CurrencyCode::THB.symbol(), "฿");
    }

    #[test]
    fn test_price_new() {
        let price = Price::new(Decimal::from(220), CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::from(220));
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }
}
