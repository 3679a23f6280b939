use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String")]
pub struct CurrencyCode(pub String);

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("DKK")
    }
}

/// A currency together with its resolved rate against the base currency.
///
/// `rate` is the number of units of this currency per one unit of the base
/// currency, so a base amount is `amount / rate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Currency {
    pub code: CurrencyCode,
    pub rate: f64,
}

impl Currency {
    pub fn new(code: impl Into<String>, rate: f64) -> Self {
        Self {
            code: CurrencyCode::new(code),
            rate,
        }
    }

    /// The base currency itself, with a rate of one.
    pub fn base(code: impl Into<String>) -> Self {
        Self::new(code, 1.0)
    }

    /// Rates must be finite and non-zero to convert amounts.
    pub fn is_usable(&self) -> bool {
        self.rate.is_finite() && self.rate != 0.0
    }

    pub fn to_base(&self, amount: f64) -> f64 {
        amount / self.rate
    }
}

/// Already-fetched exchange rates relative to one base currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    base: CurrencyCode,
    #[serde(default)]
    rates: HashMap<CurrencyCode, f64>,
}

impl RateTable {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: CurrencyCode::new(base),
            rates: HashMap::new(),
        }
    }

    /// Builds a table from `(code, rate)` pairs produced by an external rate provider.
    pub fn from_rates<I, S>(base: impl Into<String>, rates: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table = Self::new(base);
        for (code, rate) in rates {
            table.insert(code, rate);
        }
        table
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn insert(&mut self, code: impl Into<String>, rate: f64) {
        let code = CurrencyCode::new(code);
        if code == self.base {
            return;
        }
        self.rates.insert(code, rate);
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        let code = CurrencyCode::new(code);
        if code == self.base {
            return Some(1.0);
        }
        self.rates.get(&code).copied()
    }

    /// Resolves a currency code into a [`Currency`] ready for entries.
    pub fn currency(&self, code: &str) -> Option<Currency> {
        let rate = self.rate(code)?;
        Some(Currency {
            code: CurrencyCode::new(code),
            rate,
        })
    }

    /// Codes with a known rate, excluding the base currency.
    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.rates.keys()
    }
}
