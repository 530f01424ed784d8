//! Ledger Engine
//!
//! This module provides the `Ledger` struct which holds a cash balance and a
//! per-symbol inventory, and applies batches of buy/sell orders to them.
//!
//! Cash flows in the ledger's own direction: a BUY consumes inventory and
//! credits the balance, a SELL adds inventory and debits the balance.

use std::collections::BTreeMap;

use crate::models::{LedgerSnapshot, Order, OrderKind};

use super::errors::LedgerError;
use super::observer::{BalanceObserver, RejectionObserver};
use super::validation::{validate_batch, validate_inventory_quantity, validate_symbol};

/// Outcome counts for one processed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub accepted: usize,
    pub rejected: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.accepted + self.rejected
    }
}

/// Single-owner order ledger
///
/// The ledger is driven through `&mut self` and carries no internal locking;
/// wrap it in a mutex if it has to be shared.
///
/// Balance and inventory are `i64`. A batch that would move either out of
/// range is refused as a whole with `LedgerError::Overflow`.
pub struct Ledger<B: BalanceObserver> {
    balance: i64,
    inventory: BTreeMap<String, i64>,
    on_balance_changed: B,
}

impl<B: BalanceObserver> Ledger<B> {
    /// Create an empty ledger that reports balance changes to `on_balance_changed`
    pub fn new(on_balance_changed: B) -> Self {
        Self {
            balance: 0,
            inventory: BTreeMap::new(),
            on_balance_changed,
        }
    }

    /// Overwrite the balance. Does not notify the balance observer.
    pub fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }

    /// Overwrite the stored quantity for `symbol`, creating the entry if absent
    pub fn set_inventory(&mut self, symbol: &str, quantity: i64) -> Result<(), LedgerError> {
        validate_symbol(symbol)?;
        validate_inventory_quantity(quantity)?;
        self.inventory.insert(symbol.to_string(), quantity);
        Ok(())
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Current quantity held for `symbol` (0 when the symbol is unknown)
    pub fn quantity(&self, symbol: &str) -> i64 {
        self.inventory.get(symbol).copied().unwrap_or(0)
    }

    /// Inventory entries in lexicographic symbol order
    pub fn inventory(&self) -> impl Iterator<Item = (&str, i64)> {
        self.inventory.iter().map(|(symbol, qty)| (symbol.as_str(), *qty))
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            balance: self.balance,
            inventory: self.inventory.clone(),
        }
    }

    pub fn observer(&self) -> &B {
        &self.on_balance_changed
    }

    pub fn into_observer(self) -> B {
        self.on_balance_changed
    }

    /// Replay `orders` against the current state without mutating it and
    /// check every intermediate balance and inventory level fits in `i64`
    fn check_bounds(&self, orders: &[Order]) -> Result<(), LedgerError> {
        let mut balance = self.balance;
        let mut levels: BTreeMap<&str, i64> = BTreeMap::new();

        for order in orders {
            let held = levels
                .entry(order.symbol.as_str())
                .or_insert_with(|| self.quantity(&order.symbol));
            match order.kind {
                OrderKind::Buy if order.quantity > *held => {}
                OrderKind::Buy => {
                    *held -= order.quantity;
                    balance = balance.checked_add(order.quantity).ok_or_else(|| {
                        LedgerError::Overflow(format!("balance overflows after {}", order))
                    })?;
                }
                OrderKind::Sell => {
                    *held = held.checked_add(order.quantity).ok_or_else(|| {
                        LedgerError::Overflow(format!(
                            "{} inventory overflows after {}",
                            order.symbol, order
                        ))
                    })?;
                    balance = balance.checked_sub(order.quantity).ok_or_else(|| {
                        LedgerError::Overflow(format!("balance overflows after {}", order))
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Apply a batch of orders in sequence
    ///
    /// The whole batch is validated and bounds checked first; if any order is
    /// invalid or would overflow nothing is applied and neither observer is
    /// called. Otherwise each order is fully
    /// checked, applied and notified before the next one starts:
    ///
    /// - **BUY**: rejected through `on_rejected` when its quantity exceeds the
    ///   current inventory for the symbol. An accepted BUY decrements the
    ///   inventory (a zero entry is kept) and credits the balance.
    /// - **SELL**: always accepted. Increments the inventory and debits the
    ///   balance.
    ///
    /// The balance observer sees the post-mutation balance.
    pub fn process<R>(
        &mut self,
        orders: &[Order],
        on_rejected: &mut R,
    ) -> Result<BatchReport, LedgerError>
    where
        R: RejectionObserver + ?Sized,
    {
        validate_batch(orders)?;
        self.check_bounds(orders)?;

        let mut report = BatchReport::default();

        for order in orders {
            match order.kind {
                OrderKind::Buy => {
                    let available = self.quantity(&order.symbol);
                    if order.quantity > available {
                        tracing::info!(
                            account_id = order.account_id,
                            symbol = %order.symbol,
                            quantity = order.quantity,
                            available,
                            "Order rejected: insufficient inventory"
                        );
                        report.rejected += 1;
                        on_rejected.rejected(order);
                        continue;
                    }
                    self.inventory
                        .insert(order.symbol.clone(), available - order.quantity);
                    self.balance += order.quantity;
                }
                OrderKind::Sell => {
                    *self.inventory.entry(order.symbol.clone()).or_insert(0) += order.quantity;
                    self.balance -= order.quantity;
                }
            }

            tracing::debug!(
                kind = %order.kind,
                account_id = order.account_id,
                symbol = %order.symbol,
                quantity = order.quantity,
                balance = self.balance,
                "Order applied"
            );
            report.accepted += 1;
            self.on_balance_changed.balance_changed(self.balance);
        }

        Ok(report)
    }
}


// ── Property-Based Tests ────────────────────────────────────────────
