//! Defines the app level error type and its conversion to a JSON failure envelope.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::fail_response;

/// The errors that may occur in the application.
///
/// The display string of each variant is the message sent to the client, so
/// variants must not carry internal details in their message.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body could not be decoded as a transaction.
    #[error("fail decode request body")]
    InvalidRequestBody,

    /// A transaction without a user ID was submitted without the `anonymous`
    /// query flag.
    #[error("must provide user ID")]
    MissingUserId,

    /// The transaction ID in the path is not a base-10 integer.
    #[error("invalid transaction id")]
    InvalidTransactionId,

    /// The requested transaction does not exist in the store.
    #[error("transaction not found")]
    TransactionNotFound,

    /// Could not acquire the lock on the transaction store.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,
}

impl Error {
    /// The HTTP status code that the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidRequestBody | Error::MissingUserId | Error::InvalidTransactionId => {
                StatusCode::BAD_REQUEST
            }
            Error::TransactionNotFound => StatusCode::NOT_FOUND,
            Error::StoreLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        match self {
            // Internal errors are logged but not shown to the client.
            error @ Error::StoreLockError => {
                tracing::error!("An unexpected error occurred: {}", error);
                fail_response("internal server error", status_code)
            }
            error => fail_response(error.to_string(), status_code),
        }
    }
}
