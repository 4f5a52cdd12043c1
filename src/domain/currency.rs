// ============================================================================
// Currency Units
// ============================================================================

use crate::interfaces::CurrencyCatalog;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A currency, identified by its code.
///
/// `default_fraction_digits` may be negative for pseudo currencies (metals,
/// testing codes) that have no minor unit.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyUnit {
    code: Cow<'static, str>,
    numeric_code: Option<u16>,
    default_fraction_digits: i32,
}

impl CurrencyUnit {
    pub fn new(code: impl Into<String>, default_fraction_digits: i32) -> Self {
        Self {
            code: Cow::Owned(code.into()),
            numeric_code: None,
            default_fraction_digits,
        }
    }

    const fn iso(code: &'static str, numeric_code: u16, default_fraction_digits: i32) -> Self {
        Self {
            code: Cow::Borrowed(code),
            numeric_code: Some(numeric_code),
            default_fraction_digits,
        }
    }

    pub fn with_numeric_code(mut self, numeric_code: u16) -> Self {
        self.numeric_code = Some(numeric_code);
        self
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn numeric_code(&self) -> Option<u16> {
        self.numeric_code
    }

    #[inline]
    pub fn default_fraction_digits(&self) -> i32 {
        self.default_fraction_digits
    }
}

// Currencies are equal when their codes are
impl PartialEq for CurrencyUnit {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for CurrencyUnit {}

impl std::hash::Hash for CurrencyUnit {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

// ============================================================================
// Static Catalog
// ============================================================================

const ISO_CURRENCIES: &[CurrencyUnit] = &[
    CurrencyUnit::iso("USD", 840, 2),
    CurrencyUnit::iso("EUR", 978, 2),
    CurrencyUnit::iso("CHF", 756, 2),
    CurrencyUnit::iso("GBP", 826, 2),
    CurrencyUnit::iso("JPY", 392, 0),
    CurrencyUnit::iso("INR", 356, 2),
    CurrencyUnit::iso("CNY", 156, 2),
    CurrencyUnit::iso("CAD", 124, 2),
    CurrencyUnit::iso("AUD", 36, 2),
    CurrencyUnit::iso("KRW", 410, 0),
    CurrencyUnit::iso("BHD", 48, 3),
    CurrencyUnit::iso("KWD", 414, 3),
    CurrencyUnit::iso("TND", 788, 3),
    CurrencyUnit::iso("CLF", 990, 4),
    CurrencyUnit::iso("XAU", 959, -1),
    CurrencyUnit::iso("XXX", 999, -1),
];

/// In-memory currency catalog seeded with common ISO 4217 codes
#[derive(Debug, Clone)]
pub struct StaticCurrencyCatalog {
    currencies: HashMap<String, CurrencyUnit>,
}

impl StaticCurrencyCatalog {
    /// Catalog with the built-in ISO entries
    pub fn iso() -> Self {
        let currencies = ISO_CURRENCIES
            .iter()
            .map(|c| (c.code().to_string(), c.clone()))
            .collect();
        Self { currencies }
    }

    /// Empty catalog
    pub fn empty() -> Self {
        Self {
            currencies: HashMap::new(),
        }
    }

    /// Add or replace a currency
    pub fn with_currency(mut self, currency: CurrencyUnit) -> Self {
        self.currencies.insert(currency.code().to_string(), currency);
        self
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

impl Default for StaticCurrencyCatalog {
    fn default() -> Self {
        Self::iso()
    }
}

impl CurrencyCatalog for StaticCurrencyCatalog {
    fn currency(&self, code: &str) -> Option<CurrencyUnit> {
        self.currencies.get(code).cloned()
    }
}
