//! Defines the endpoint for creating a new transaction.

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    response::Response,
};

use crate::{
    AppState, Error,
    response::success_response,
    stores::TransactionStore,
    transaction::TransactionBuilder,
};

/// The query parameter that allows a transaction without a user ID.
const ANONYMOUS_PARAM: &str = "anonymous";

/// A route handler for creating a new transaction.
///
/// The body is decoded as JSON regardless of the content type. Transactions
/// without a user ID are rejected unless the query contains `anonymous=true`.
/// Responds with the stored transaction on success.
pub async fn create_transaction_endpoint<T>(
    State(state): State<AppState<T>>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Response, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let builder = TransactionBuilder::from_json(&body).map_err(|error| {
        tracing::error!(error = %error, "fail decode request body");
        Error::InvalidRequestBody
    })?;

    if builder.user_id.is_anonymous() && !is_anonymous_request(query.as_deref()) {
        tracing::error!(payload = ?builder, "transaction has empty user ID");
        return Err(Error::MissingUserId);
    }

    let mut store = state.transaction_store;
    let transaction = store.insert(builder)?;

    tracing::debug!(transaction_id = transaction.id, "created transaction");

    Ok(success_response(transaction))
}

/// Whether the raw `query` string contains a truthy `anonymous` flag.
///
/// Only the first `anonymous` parameter counts. A query that cannot be parsed
/// counts as not anonymous.
fn is_anonymous_request(query: Option<&str>) -> bool {
    let Some(query) = query else {
        return false;
    };

    serde_urlencoded::from_str::<Vec<(String, String)>>(query)
        .unwrap_or_default()
        .into_iter()
        .find(|(key, _)| key == ANONYMOUS_PARAM)
        .is_some_and(|(_, value)| parse_bool_flag(&value))
}

/// Parse a boolean flag, accepting the spellings `1`, `t`, `T`, `TRUE`, `true` and `True`.
///
/// Anything else is false.
fn parse_bool_flag(value: &str) -> bool {
    matches!(value, "1" | "t" | "T" | "TRUE" | "true" | "True")
}
