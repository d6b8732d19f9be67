//! Defines the transaction store trait.

use crate::{
    Error,
    transaction::{Transaction, TransactionBuilder, TransactionId},
};

/// Handles the creation and retrieval of transactions.
///
/// Request handlers only talk to this trait, so a concurrency safe or
/// persistent backend can be swapped in without touching them.
pub trait TransactionStore {
    /// Retrieve a snapshot of every transaction in the store.
    ///
    /// Callers must not rely on the order of the transactions.
    fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve a transaction from the store.
    ///
    /// # Errors
    /// Returns [Error::TransactionNotFound] if `id` does not refer to a stored transaction.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Create a new transaction in the store.
    ///
    /// The store assigns the ID and the creation time, the rest of the
    /// transaction is taken from `builder`.
    fn insert(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;
}
