//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::Response,
    routing::get,
};

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    response::{fail_response, success_response},
    stores::TransactionStore,
    transaction::{
        create_transaction_endpoint, get_transaction_endpoint, list_transactions_endpoint,
    },
};

/// The greeting sent by the health check.
const HEALTH_GREETING: &str = "Berry nice!";

/// Return a router with all the app's routes.
///
/// Every route, including the fallback, is wrapped in [logging_middleware].
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint::<T>).post(create_transaction_endpoint::<T>),
        )
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint::<T>))
        .fallback(get_404_not_found)
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// Check that the server is up.
async fn get_health() -> Response {
    success_response(HEALTH_GREETING)
}

async fn get_404_not_found() -> Response {
    fail_response("page not found", StatusCode::NOT_FOUND)
}

async fn get_405_method_not_allowed() -> Response {
    fail_response("method not allowed", StatusCode::METHOD_NOT_ALLOWED)
}
