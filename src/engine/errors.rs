//! Error types for ledger operations
//!
//! An order rejected for insufficient inventory is a normal outcome delivered
//! through the rejection observer, so it never appears here. These errors only
//! cover input that breaks the ledger's preconditions.

use thiserror::Error;

/// Errors that can occur while configuring the ledger or submitting a batch
///
/// # Error Categories
///
/// - **Validation Errors**: `InvalidQuantity`, `InvalidSymbol`
/// - **Range Errors**: `Overflow`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Quantity validation failed (zero or negative order, negative inventory)
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// The symbol is empty or whitespace only
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Applying the batch would push the balance or an inventory level out of `i64` range
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

impl LedgerError {
    /// Returns true if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidQuantity(_) | LedgerError::InvalidSymbol(_)
        )
    }
}
