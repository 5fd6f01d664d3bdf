//! Currency enumeration for session pricing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies a session can be priced in.
///
/// A closed set: a currency code is valid iff it names one of these
/// variants. Lookup is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Ron,
}

impl Currency {
    /// Returns the ISO 4217 code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Ron => "RON",
        }
    }

    /// Looks up a currency by code, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.as_code().eq_ignore_ascii_case(code))
    }

    /// Returns true if the code names a supported currency.
    pub fn code_exists(code: &str) -> bool {
        Self::from_code(code).is_some()
    }

    /// All supported currencies.
    pub fn all() -> [Currency; 4] {
        [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Ron]
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> String {
        currency.as_code().to_string()
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Currency::from_code(&code).ok_or_else(|| format!("Unknown currency code: {}", code))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}
