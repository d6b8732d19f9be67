//! Transactions and the endpoints for listing, creating and getting them.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The route handlers that read from and write to a
//!   [TransactionStore](crate::stores::TransactionStore)

mod core;
mod create_endpoint;
mod get_endpoint;
mod list_endpoint;

pub use core::{Transaction, TransactionBuilder, TransactionId, UserID};
pub use create_endpoint::create_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
