// Library Crate Root
// lib.rs

// main.rs imports through lib.rs like an external crate
pub mod engine;
pub mod models;
pub mod risk;

// pub use = re-export at crate root
pub use engine::{
    BalanceObserver, BatchReport, Ledger, LedgerError, RejectionCollector, RejectionObserver,
};
pub use models::{AccountId, LedgerSnapshot, Order, OrderKind};
pub use risk::{BalanceAlert, BalanceAlertConfig, BalanceMonitor};
