//! Ticket pricing.

use std::cmp::Ordering;
use std::fmt;

/// The priced total for an itinerary.
///
/// The amount is parsed from the feed once, at extraction time, so
/// price sorts compare numbers rather than re-parsing strings. Amounts
/// are only comparable within a currency; the feed prices every
/// itinerary in a single currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Fare {
    amount: f64,
    currency: String,
}

impl Fare {
    /// Create a fare from an already-validated amount.
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Returns the ticket amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Total ordering on the amount, used by price sorts.
    pub fn cmp_amount(&self, other: &Self) -> Ordering {
        self.amount.total_cmp(&other.amount)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}
