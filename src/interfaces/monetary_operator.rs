// ============================================================================
// Monetary Operator Interface
// Defines the contract for amount-to-amount transformations
// ============================================================================

use crate::domain::Money;

/// Pure transformation of an amount (rounding, currency-preserving adjustments).
///
/// Implementations must not mutate the input and must be shareable across
/// threads. Closures `Fn(&Money) -> Money` are operators as well.
pub trait MonetaryOperator: Send + Sync {
    /// Produce a new amount from `amount`
    fn apply(&self, amount: &Money) -> Money;
}

impl<F> MonetaryOperator for F
where
    F: Fn(&Money) -> Money + Send + Sync,
{
    fn apply(&self, amount: &Money) -> Money {
        self(amount)
    }
}
