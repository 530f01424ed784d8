//! Notification sinks for the ledger
//!
//! Both traits are implemented for plain closures, so callers can pass
//! `|balance| ...` and `|order| ...` directly, or hand in a stateful observer
//! such as [`RejectionCollector`].

use std::collections::BTreeMap;

use crate::models::{AccountId, Order};

/// Receives the new balance after every accepted order
pub trait BalanceObserver {
    fn balance_changed(&mut self, new_balance: i64);
}

impl<F: FnMut(i64)> BalanceObserver for F {
    fn balance_changed(&mut self, new_balance: i64) {
        self(new_balance)
    }
}

/// Receives every order rejected for insufficient inventory
pub trait RejectionObserver {
    fn rejected(&mut self, order: &Order);
}

impl<F: FnMut(&Order)> RejectionObserver for F {
    fn rejected(&mut self, order: &Order) {
        self(order)
    }
}

/// Collects rejected orders so they can be grouped after a batch
#[derive(Debug, Default, Clone)]
pub struct RejectionCollector {
    orders: Vec<Order>,
}

impl RejectionCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Group rejected orders by submitting account
    ///
    /// Within each account, orders keep the order in which they were rejected.
    pub fn by_account(&self) -> BTreeMap<AccountId, Vec<Order>> {
        let mut grouped: BTreeMap<AccountId, Vec<Order>> = BTreeMap::new();
        for order in &self.orders {
            grouped.entry(order.account_id).or_default().push(order.clone());
        }
        grouped
    }

    pub fn into_orders(self) -> Vec<Order> {
        self.orders
    }
}

impl RejectionObserver for RejectionCollector {
    fn rejected(&mut self, order: &Order) {
        self.orders.push(order.clone());
    }
}
