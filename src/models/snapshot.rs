use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Point-in-time view of the ledger state
///
/// Inventory is keyed by symbol in lexicographic order so that display and
/// JSON output are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub balance: i64,
    pub inventory: BTreeMap<String, i64>,
}

impl LedgerSnapshot {
    /// Serialize the snapshot as a compact JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for LedgerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{inventory: {{")?;
        for (i, (symbol, quantity)) in self.inventory.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", symbol, quantity)?;
        }
        write!(f, "}}, balance: {}}}", self.balance)
    }
}
