// ============================================================================
// Format Token Interface
// Parse/print contract consumed by amount formatting layers
// ============================================================================

use crate::domain::{CurrencyUnit, Money};
use crate::numeric::CanonicalDecimal;
use std::fmt;
use thiserror::Error;

/// Errors raised by format tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input did not match the token at `index`
    #[error("parse error at index {index}: {message}")]
    Parse { message: String, index: usize },

    /// The output sink rejected a write
    #[error("failed to write to sink")]
    Sink(#[from] fmt::Error),
}

/// Cursor over the text being parsed plus the parts recognized so far
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    input: &'a str,
    index: usize,
    currency: Option<CurrencyUnit>,
    number: Option<CanonicalDecimal>,
}

impl<'a> ParseContext<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            index: 0,
            currency: None,
            number: None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Unparsed remainder of the input
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.index..]
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.index >= self.input.len()
    }

    /// Advance past `prefix` if the remaining input starts with it.
    ///
    /// Returns `false` and leaves the cursor in place otherwise.
    pub fn consume(&mut self, prefix: &str) -> bool {
        if !self.remaining().starts_with(prefix) {
            return false;
        }
        self.index += prefix.len();
        true
    }

    pub fn skip_whitespace(&mut self) {
        let trimmed = self.remaining().trim_start();
        self.index = self.input.len() - trimmed.len();
    }

    /// Build a parse error at the current position
    pub fn error(&self, message: impl Into<String>) -> FormatError {
        FormatError::Parse {
            message: message.into(),
            index: self.index,
        }
    }

    pub fn set_currency(&mut self, currency: CurrencyUnit) {
        self.currency = Some(currency);
    }

    pub fn set_number(&mut self, number: CanonicalDecimal) {
        self.number = Some(number);
    }

    pub fn currency(&self) -> Option<&CurrencyUnit> {
        self.currency.as_ref()
    }

    pub fn number(&self) -> Option<&CanonicalDecimal> {
        self.number.as_ref()
    }
}

/// One element of an amount format (literal, currency, number, ...).
///
/// Formatting layers chain tokens; each consumes its part of the input on
/// parse and appends its part of the output on print.
pub trait FormatToken: Send + Sync {
    /// Consume this token's part of the input
    fn parse(&self, context: &mut ParseContext<'_>) -> Result<(), FormatError>;

    /// Append this token's rendering of `amount` to `sink`
    fn print(&self, sink: &mut dyn fmt::Write, amount: &Money) -> Result<(), FormatError>;
}
