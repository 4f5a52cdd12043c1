// ============================================================================
// Monetary Errors
// Error types shared by normalization, rounding and provider resolution
// ============================================================================

use thiserror::Error;

/// Errors that can occur while creating, normalizing or rounding amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonetaryError {
    /// A required argument (currency, rounding mode, number) was not supplied
    #[error("missing argument: {0} is required")]
    MissingArgument(&'static str),

    /// No normalization path could interpret the input
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// Two amounts with different currency codes were combined or compared
    #[error("currency mismatch: {expected}/{found}")]
    CurrencyMismatch { expected: String, found: String },

    /// An amount type cannot satisfy the required context or hold the number
    #[error("incompatible context for {amount_type}: required={required}, maximal={maximal}")]
    IncompatibleContext {
        amount_type: String,
        required: String,
        maximal: String,
    },

    /// No registered provider is compatible with the required context
    #[error("no amount provider matches context {0}")]
    NoMatchingProvider(String),

    /// The currency catalog does not know the requested code
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// Factory or registry configuration is inconsistent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for monetary operations
pub type MonetaryResult<T> = Result<T, MonetaryError>;
