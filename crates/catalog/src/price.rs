//! Prices and their display formatting.

use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Non-negative currency amount, in whole units (no minor units).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> u64 {
        self.0
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl ValueObject for Price {}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl<'a> core::iter::Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Renders amounts with grouped thousands and a fixed currency suffix.
///
/// Defaults follow the ru-RU locale: digits grouped by three with a no-break
/// space, followed by `" ₽"` (so `2490` renders as `2 490 ₽`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFormat {
    pub group_separator: char,
    /// Digits per group; `0` disables grouping.
    pub group_size: usize,
    pub currency_suffix: String,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            group_separator: '\u{a0}',
            group_size: 3,
            currency_suffix: " ₽".to_string(),
        }
    }
}

impl PriceFormat {
    pub fn format(&self, price: Price) -> String {
        let digits = price.amount().to_string();
        let mut out = String::with_capacity(digits.len() * 2 + self.currency_suffix.len());

        if self.group_size == 0 {
            out.push_str(&digits);
        } else {
            let len = digits.len();
            for (i, ch) in digits.chars().enumerate() {
                if i > 0 && (len - i) % self.group_size == 0 {
                    out.push(self.group_separator);
                }
                out.push(ch);
            }
        }

        out.push_str(&self.currency_suffix);
        out
    }
}

/// Format `amount` with the default [`PriceFormat`].
pub fn format_price(amount: u64) -> String {
    PriceFormat::default().format(Price::new(amount))
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&PriceFormat::default().format(*self))
    }
}
