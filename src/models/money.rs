//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 cents) so that balances are
//! exact. Amounts typed by users are parsed once, at entry creation time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Currency symbols accepted (and ignored) in front of a typed amount
const KNOWN_SYMBOLS: [char; 4] = ['₹', '$', '€', '£'];

/// Largest amount `Money::parse` accepts: one trillion units
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000_000);

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use party_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that returns `None` instead of overflowing
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse a money amount from user text
    ///
    /// Accepts "100", "10.5", "10.50", "-10.50", "₹10.50" and "$10". At most
    /// one currency symbol and two decimal places are allowed, and the
    /// magnitude may not exceed [`MAX_AMOUNT`]. Anything else is rejected
    /// rather than silently coerced.
    ///
    /// # Examples
    /// ```
    /// use party_ledger::models::Money;
    /// assert_eq!(Money::parse("₹12.5").unwrap().cents(), 1250);
    /// assert!(Money::parse("twelve").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.strip_prefix(&KNOWN_SYMBOLS[..]).unwrap_or(s).trim_start();

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty())
            || !all_digits(whole)
            || !all_digits(frac)
            || frac.len() > 2
        {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::Overflow)?
        };
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .filter(|&c| c <= MAX_AMOUNT.0)
            .ok_or(MoneyParseError::Overflow)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol ahead of the sign, e.g. `₹-50.00`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    Overflow,
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Amount is required"),
            Self::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            Self::Overflow => write!(f, "Amount is too large (maximum {})", MAX_AMOUNT),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_units(-50).format_with_symbol("₹"), "₹-50.00");
        assert_eq!(Money::from_cents(-5).format_with_symbol("₹"), "₹-0.05");
        assert_eq!(Money::from_cents(5).format_with_symbol("$"), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(b), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("100").unwrap().cents(), 10000);
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("  ₹40 ").unwrap().cents(), 4000);
        assert_eq!(Money::parse("$0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
        assert!(matches!(Money::parse("abc"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1.2.3"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("10.505"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1e3"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("."), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("10.-5"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("₹$10"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("₹₹10"), Err(MoneyParseError::InvalidFormat(_))));
        assert_eq!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow)
        );
    }

    #[test]
    fn test_parse_caps_amount() {
        assert_eq!(Money::parse("1000000000000"), Ok(MAX_AMOUNT));
        assert_eq!(Money::parse("-1000000000000"), Ok(-MAX_AMOUNT));
        assert_eq!(Money::parse("1000000000000.01"), Err(MoneyParseError::Overflow));
        assert_eq!(Money::parse("90000000000000000"), Err(MoneyParseError::Overflow));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
