//! Item amounts
//!
//! Amount text typed by the user is never rejected: anything that does not
//! parse becomes [`Amount::NotANumber`], which poisons every total it is
//! added to and renders as `NaN`. A sum that overflows is `NotANumber` too.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::money::Money;

/// An amount that is either a money value or the result of unparseable input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Money>", into = "Option<Money>")]
pub enum Amount {
    Value(Money),
    NotANumber,
}

impl Amount {
    pub const fn zero() -> Self {
        Self::Value(Money::zero())
    }

    /// Parse amount text, mapping anything unparseable to `NotANumber`
    pub fn parse(text: &str) -> Self {
        Money::parse(text).map_or(Self::NotANumber, Self::Value)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Self::NotANumber)
    }

    pub fn money(&self) -> Option<Money> {
        match self {
            Self::Value(m) => Some(*m),
            Self::NotANumber => None,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.money().is_some_and(|m| m.is_negative())
    }

    pub fn format_with_symbol(&self, symbol: &str) -> String {
        match self {
            Self::Value(m) => m.format_with_symbol(symbol),
            Self::NotANumber => format!("{}NaN", symbol),
        }
    }

    /// Text used to pre-fill an editor for this amount
    pub fn edit_text(&self) -> String {
        match self {
            Self::Value(m) => {
                let sign = if m.is_negative() { "-" } else { "" };
                format!("{}{}.{:02}", sign, m.units().abs(), m.cents_part())
            }
            Self::NotANumber => String::new(),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        Self::Value(money)
    }
}

impl From<Option<Money>> for Amount {
    fn from(money: Option<Money>) -> Self {
        money.map_or(Self::NotANumber, Self::Value)
    }
}

impl From<Amount> for Option<Money> {
    fn from(amount: Amount) -> Self {
        amount.money()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a.checked_add(b).into(),
            _ => Self::NotANumber,
        }
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a.checked_sub(b).into(),
            _ => Self::NotANumber,
        }
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("1500"), Amount::Value(Money::from_units(1500)));
        assert_eq!(Amount::parse("fifteen"), Amount::NotANumber);
        assert_eq!(Amount::parse(""), Amount::NotANumber);
    }

    #[test]
    fn test_nan_poisons_sums() {
        let total: Amount = [Amount::parse("10"), Amount::NotANumber, Amount::parse("5")]
            .into_iter()
            .sum();
        assert!(total.is_nan());
        assert!((Amount::parse("1") - Amount::NotANumber).is_nan());
    }

    #[test]
    fn test_overflow_is_nan() {
        let huge = Amount::parse("90000000000000000");
        assert!(!huge.is_nan());
        assert!((huge + huge).is_nan());
        assert!((Amount::parse("-90000000000000000") - huge).is_nan());
        assert!([huge, huge, Amount::parse("1")].into_iter().sum::<Amount>().is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::parse("1200").to_string(), "$1200.00");
        assert_eq!(Amount::NotANumber.to_string(), "$NaN");
        assert_eq!(Amount::NotANumber.format_with_symbol("€"), "€NaN");
    }

    #[test]
    fn test_edit_text() {
        assert_eq!(Amount::parse("12.5").edit_text(), "12.50");
        assert_eq!(Amount::parse("-0.25").edit_text(), "-0.25");
        assert_eq!(Amount::NotANumber.edit_text(), "");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Amount::parse("10.50")).unwrap(), "1050");
        assert_eq!(serde_json::to_string(&Amount::NotANumber).unwrap(), "null");

        let parsed: Amount = serde_json::from_str("null").unwrap();
        assert!(parsed.is_nan());
    }
}
