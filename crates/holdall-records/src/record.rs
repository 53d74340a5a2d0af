//! The [`Record`] value object.

use std::fmt;

/// A two-field record: vehicle brand and model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Brand token, e.g. `"Toyota"`.
    pub brand: String,
    /// Model token, e.g. `"Corolla"`.
    pub model: String,
}

impl Record {
    /// Construct a record from any string-like pair.
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.model)
    }
}
