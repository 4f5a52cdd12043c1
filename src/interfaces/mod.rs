// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod currency_catalog;
mod format_token;
mod monetary_operator;
mod provider_source;

pub use currency_catalog::CurrencyCatalog;
pub use format_token::{FormatError, FormatToken, ParseContext};
pub use monetary_operator::MonetaryOperator;
pub use provider_source::ProviderSource;
