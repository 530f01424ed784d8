use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the account that submitted an order
pub type AccountId = i32;

/// Represents a single buy or sell directive against the ledger
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub kind: OrderKind,
    pub quantity: i64,
    pub symbol: String,
    pub account_id: AccountId,
}

/// Order kind: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderKind {
    Buy,
    Sell,
}

impl Order {
    /// Create a new order
    pub fn new(kind: OrderKind, quantity: i64, symbol: impl Into<String>, account_id: AccountId) -> Self {
        Self {
            kind,
            quantity,
            symbol: symbol.into(),
            account_id,
        }
    }

    /// Shorthand for a buy order
    pub fn buy(quantity: i64, symbol: impl Into<String>, account_id: AccountId) -> Self {
        Self::new(OrderKind::Buy, quantity, symbol, account_id)
    }

    /// Shorthand for a sell order
    pub fn sell(quantity: i64, symbol: impl Into<String>, account_id: AccountId) -> Self {
        Self::new(OrderKind::Sell, quantity, symbol, account_id)
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Buy => write!(f, "BUY"),
            OrderKind::Sell => write!(f, "SELL"),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (account {})",
            self.kind, self.quantity, self.symbol, self.account_id
        )
    }
}
