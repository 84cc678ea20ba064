//! Phone number newtype.
//!
//! The upstream backend identifies operators and retailers by phone number.
//! A number is built by concatenating a country-code prefix (e.g. `+91`)
//! with the national number. No further format validation is performed -
//! the backend is the authority on whether a number is reachable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A phone number in prefixed international form (e.g. `+919876543210`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Build a phone number from a country-code prefix and a national number.
    #[must_use]
    pub fn new(country_code: &str, national_number: &str) -> Self {
        Self(format!("{country_code}{national_number}"))
    }

    /// The full prefixed number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PhoneNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}
