//! Defines the endpoint for listing every transaction.

use axum::{extract::State, response::Response};

use crate::{AppState, Error, response::success_response, stores::TransactionStore};

/// A route handler that responds with all stored transactions.
pub async fn list_transactions_endpoint<T>(
    State(state): State<AppState<T>>,
) -> Result<Response, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let transactions = state.transaction_store.list()?;

    Ok(success_response(transactions))
}
