//! Defines the endpoint for getting a single transaction by its ID.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    AppState, Error,
    response::success_response,
    stores::TransactionStore,
    transaction::TransactionId,
};

/// A route handler for getting a transaction by its ID.
///
/// The ID is taken from the path as text so that a malformed ID is reported
/// with the same JSON envelope as every other error.
pub async fn get_transaction_endpoint<T>(
    State(state): State<AppState<T>>,
    Path(transaction_id): Path<String>,
) -> Result<Response, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let id: TransactionId = transaction_id.parse().map_err(|_| {
        tracing::error!(transaction_id = %transaction_id, "invalid transaction id");
        Error::InvalidTransactionId
    })?;

    let transaction = state.transaction_store.get(id).inspect_err(|error| {
        if *error == Error::TransactionNotFound {
            tracing::warn!(transaction_id = id, "transaction not found");
        }
    })?;

    Ok(success_response(transaction))
}

#[cfg(test)]
mod get_transaction_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };

    use crate::{
        AppState, Envelope, Error,
        stores::InMemoryTransactionStore,
        test_utils::get_response_json,
        transaction::Transaction,
    };

    use super::get_transaction_endpoint;

    fn get_test_state() -> AppState<InMemoryTransactionStore> {
        AppState::new(InMemoryTransactionStore::with_seed_data())
    }

    #[tokio::test]
    async fn gets_seeded_transaction() {
        let response = get_transaction_endpoint(State(get_test_state()), Path("2".to_owned()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let envelope: Envelope<Transaction> = get_response_json(response).await;
        let transaction = envelope.data.unwrap();
        assert!(transaction.user_id.is_anonymous());
        assert_eq!(transaction.name, "Anonymous buy T-Shirts");
        assert_eq!(transaction.amount, 200_000);
    }

    #[tokio::test]
    async fn accepts_signed_id() {
        let result = get_transaction_endpoint(State(get_test_state()), Path("+1".to_owned())).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn fails_on_missing_transaction() {
        let result =
            get_transaction_endpoint(State(get_test_state()), Path("999".to_owned())).await;

        assert_eq!(result.err(), Some(Error::TransactionNotFound));
    }

    #[tokio::test]
    async fn fails_on_invalid_id() {
        for id in ["abc", "1.5", "", "99999999999999999999"] {
            let result =
                get_transaction_endpoint(State(get_test_state()), Path(id.to_owned())).await;

            assert_eq!(
                result.err(),
                Some(Error::InvalidTransactionId),
                "want invalid ID error for {id:?}"
            );
        }
    }
}
