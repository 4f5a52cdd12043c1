// ============================================================================
// Currency Catalog Interface
// Lookup of currency units by code
// ============================================================================

use crate::domain::CurrencyUnit;
use crate::numeric::{MonetaryError, MonetaryResult};

/// Source of currency units, e.g. an ISO 4217 table
pub trait CurrencyCatalog: Send + Sync {
    /// Look up a currency by code
    fn currency(&self, code: &str) -> Option<CurrencyUnit>;

    /// Look up a currency, failing with `UnknownCurrency`
    fn require(&self, code: &str) -> MonetaryResult<CurrencyUnit> {
        self.currency(code)
            .ok_or_else(|| MonetaryError::UnknownCurrency(code.to_string()))
    }
}
