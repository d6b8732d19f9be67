//! Implements an in-memory transaction store.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use time::{Duration, OffsetDateTime};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{Transaction, TransactionBuilder, TransactionId, UserID},
};

#[derive(Debug)]
struct Inner {
    transactions: BTreeMap<TransactionId, Transaction>,
    next_id: TransactionId,
}

impl Inner {
    fn insert(&mut self, builder: TransactionBuilder, created_at: i64) -> Transaction {
        let id = self.next_id;
        self.next_id += 1;

        let transaction = builder.finalise(id, created_at);
        self.transactions.insert(id, transaction.clone());

        transaction
    }
}

/// Stores transactions in memory for the lifetime of the process.
///
/// Clones share the same underlying map. IDs come from a counter that is
/// incremented under the lock, so concurrent inserts never get the same ID.
#[derive(Debug, Clone)]
pub struct InMemoryTransactionStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryTransactionStore {
    /// Create an empty store. The first transaction gets the ID 1.
    pub fn new() -> Self {
        Self::from_inner(Inner {
            transactions: BTreeMap::new(),
            next_id: 1,
        })
    }

    /// Create a store holding the two example transactions the server starts with.
    ///
    /// The first was made by user 1 an hour ago and the second anonymously half an hour ago.
    pub fn with_seed_data() -> Self {
        let now = OffsetDateTime::now_utc();
        let mut inner = Inner {
            transactions: BTreeMap::new(),
            next_id: 1,
        };

        inner.insert(
            Transaction::build("Buy iPhone 13")
                .user_id(UserID::new(1))
                .items(["iPhone 13", "Clear Case"])
                .amount(10_000_000),
            (now - Duration::hours(1)).unix_timestamp(),
        );
        inner.insert(
            Transaction::build("Anonymous buy T-Shirts")
                .user_id(UserID::ANONYMOUS)
                .items([
                    "T-Shirt Bugs Bunny White Colour",
                    "T-Shirt Tweety Sun Colour",
                ])
                .amount(200_000),
            (now - Duration::minutes(30)).unix_timestamp(),
        );

        Self::from_inner(inner)
    }

    fn from_inner(inner: Inner) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }
}

impl Default for InMemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for InMemoryTransactionStore {
    /// Retrieve all transactions in ascending order of ID.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        let inner = self.inner.lock().map_err(|_| Error::StoreLockError)?;

        Ok(inner.transactions.values().cloned().collect())
    }

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::TransactionNotFound] if `id` does not refer to a stored transaction,
    /// - or [Error::StoreLockError] if the lock is poisoned.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        let inner = self.inner.lock().map_err(|_| Error::StoreLockError)?;

        inner
            .transactions
            .get(&id)
            .cloned()
            .ok_or(Error::TransactionNotFound)
    }

    /// Insert a new transaction created now.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    fn insert(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let created_at = OffsetDateTime::now_utc().unix_timestamp();
        let mut inner = self.inner.lock().map_err(|_| Error::StoreLockError)?;

        Ok(inner.insert(builder, created_at))
    }
}
