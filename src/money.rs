//! Money type for representing storefront prices.
//!
//! Uses smallest-unit integer representation to avoid floating-point
//! precision issues that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Bangladeshi taka. The storefront prices in whole taka, so the minor
    /// unit here is the taka itself.
    #[default]
    BDT,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "BDT").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BDT => "BDT",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "৳").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BDT => "\u{09f3}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::BDT => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "BDT" => Some(Currency::BDT),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency. Catalogs are
/// single-currency; comparisons inside the browse engine go through the
/// minor-unit amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use catalog_browse::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_minor, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Clamp the amount into [min, max], keeping the currency.
    pub fn clamp(self, min: Money, max: Money) -> Money {
        Money::new(
            self.amount_minor.clamp(min.amount_minor, max.amount_minor),
            self.currency,
        )
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "৳1000").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor_units() {
        let m = Money::new(1000, Currency::BDT);
        assert_eq!(m.amount_minor, 1000);
        assert_eq!(m.currency, Currency::BDT);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_minor, 4999);

        let m = Money::from_decimal(1000.0, Currency::BDT);
        assert_eq!(m.amount_minor, 1000); // whole-taka pricing
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(1000, Currency::BDT);
        assert_eq!(m.display(), "\u{09f3}1000");

        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_clamp() {
        let zero = Money::zero(Currency::BDT);
        let max = Money::new(250_000, Currency::BDT);

        let over = Money::new(400_000, Currency::BDT);
        assert_eq!(over.clamp(zero, max).amount_minor, 250_000);

        let under = Money::new(-5, Currency::BDT);
        assert_eq!(under.clamp(zero, max).amount_minor, 0);

        let inside = Money::new(1500, Currency::BDT);
        assert_eq!(inside.clamp(zero, max).amount_minor, 1500);
    }

    #[test]
    fn test_money_zero() {
        let z = Money::zero(Currency::BDT);
        assert!(z.is_zero());
        assert!(!z.is_positive());
        assert!(Money::new(1, Currency::BDT).is_positive());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("BDT"), Some(Currency::BDT));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
