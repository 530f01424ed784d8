//! Ledger Engine Module
//!
//! This module contains the core ledger functionality:
//! - `errors` - Error types for ledger operations
//! - `validation` - Order and inventory validation functions
//! - `observer` - Balance and rejection notification sinks
//! - `ledger` - Balance/inventory state and batch processing

pub mod errors;
pub mod ledger;
pub mod observer;
pub mod validation;

// Re-export commonly used types for convenience
pub use errors::LedgerError;
pub use ledger::{BatchReport, Ledger};
pub use observer::{BalanceObserver, RejectionCollector, RejectionObserver};
