pub mod order;
pub mod snapshot;

pub use order::{AccountId, Order, OrderKind};
pub use snapshot::LedgerSnapshot;
