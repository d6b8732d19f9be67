//! Contains traits and implementations for objects that store [transactions](crate::Transaction).

mod memory;
mod transaction;

pub use memory::InMemoryTransactionStore;
pub use transaction::TransactionStore;
