//! Order and inventory validation functions
//!
//! All precondition checks live here so the ledger can validate a whole batch
//! before touching any state.

use crate::models::Order;

use super::errors::LedgerError;

// ============================================================================
// Individual Validation Functions
// ============================================================================

/// Validate that an order quantity is positive
///
/// # Returns
/// * `Ok(())` if quantity is greater than zero
/// * `Err(LedgerError::InvalidQuantity)` if quantity is zero or negative
pub fn validate_quantity(quantity: i64) -> Result<(), LedgerError> {
    if quantity <= 0 {
        return Err(LedgerError::InvalidQuantity(format!(
            "Quantity must be positive, got: {}",
            quantity
        )));
    }
    Ok(())
}

/// Validate a stored inventory level (zero is allowed)
pub fn validate_inventory_quantity(quantity: i64) -> Result<(), LedgerError> {
    if quantity < 0 {
        return Err(LedgerError::InvalidQuantity(format!(
            "Inventory must not be negative, got: {}",
            quantity
        )));
    }
    Ok(())
}

/// Validate that a symbol is not blank
pub fn validate_symbol(symbol: &str) -> Result<(), LedgerError> {
    if symbol.trim().is_empty() {
        return Err(LedgerError::InvalidSymbol(format!(
            "Symbol must not be blank, got: {:?}",
            symbol
        )));
    }
    Ok(())
}

// ============================================================================
// Composite Validation Functions
// ============================================================================

/// Validate a single order before processing
///
/// # Validations Performed
/// 1. Quantity must be positive
/// 2. Symbol must not be blank
pub fn validate_order(order: &Order) -> Result<(), LedgerError> {
    validate_quantity(order.quantity)?;
    validate_symbol(&order.symbol)?;
    Ok(())
}

/// Validate every order of a batch, returning the first error encountered
pub fn validate_batch(orders: &[Order]) -> Result<(), LedgerError> {
    orders.iter().try_for_each(validate_order)
}

// ============================================================================
// Tests
// ============================================================================
