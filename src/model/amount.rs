//! Amount type for YNAB monetary values.
//!
//! YNAB reports money in milliunits: 1000 milliunits is one unit of currency, so an
//! `amount` of `-12340` is `-12.34`. `Amount` wraps `Decimal` and renders without
//! trailing zeros, the way the amounts appear in the spreadsheet.

use rust_decimal::Decimal;
use std::fmt;

/// A currency amount converted from YNAB milliunits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Converts milliunits into a currency amount, e.g. `-12340` -> `-12.34`.
    pub fn from_milliunits(milliunits: i64) -> Self {
        Self {
            value: Decimal::new(milliunits, 3).normalize(),
        }
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}
