pub mod balance_alert;

pub use balance_alert::{BalanceAlert, BalanceAlertConfig, BalanceMonitor};
