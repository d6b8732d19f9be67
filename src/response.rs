//! The JSON envelope that wraps every response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The uniform body of every response.
///
/// Successful responses set `ok` and carry `data`, failed responses clear `ok`
/// and carry a human readable `error_message`. Fields that are `None` are left
/// out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the request succeeded.
    pub ok: bool,
    /// The payload of a successful request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Why the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<T> Envelope<T> {
    /// Wrap `data` in a successful envelope.
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error_message: None,
        }
    }

    /// Create a failed envelope with `message`.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error_message: Some(message.into()),
        }
    }
}

/// Respond with `data` wrapped in a successful envelope and the status code 200.
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(Envelope::success(data))).into_response()
}

/// Respond with a failed envelope containing `message` and the status code `status_code`.
pub fn fail_response(message: impl Into<String>, status_code: StatusCode) -> Response {
    (status_code, Json(Envelope::<()>::fail(message))).into_response()
}

#[cfg(test)]
mod envelope_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        Transaction, UserID,
        test_utils::{assert_content_type, get_response_json},
    };

    use super::{Envelope, fail_response, success_response};

    #[test]
    fn success_omits_error_message() {
        let envelope = Envelope::success("Berry nice!");

        let got = serde_json::to_value(&envelope).unwrap();

        assert_eq!(got, json!({"ok": true, "data": "Berry nice!"}));
    }

    #[test]
    fn fail_omits_data() {
        let envelope = Envelope::<()>::fail("transaction not found");

        let got = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            got,
            json!({"ok": false, "error_message": "transaction not found"})
        );
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let envelope: Envelope<String> = serde_json::from_str(r#"{"ok": false}"#).unwrap();

        assert_eq!(
            envelope,
            Envelope {
                ok: false,
                data: None,
                error_message: None
            }
        );
    }

    #[test]
    fn deserializes_data_without_default() {
        let envelope: Envelope<Transaction> = serde_json::from_value(json!({
            "ok": true,
            "data": {"user_id": 1, "name": "foo", "items": ["bar"], "amount": 2},
        }))
        .unwrap();

        assert_eq!(
            envelope,
            Envelope::success(
                Transaction::build("foo")
                    .user_id(UserID::new(1))
                    .items(["bar"])
                    .amount(2)
                    .finalise(0, 0)
            )
        );
    }

    #[tokio::test]
    async fn success_response_is_json_with_status_ok() {
        let response = success_response(vec![1, 2, 3]);

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "application/json");
        let envelope: Envelope<Vec<i32>> = get_response_json(response).await;
        assert_eq!(envelope, Envelope::success(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn fail_response_uses_given_status() {
        let response = fail_response("invalid transaction id", StatusCode::BAD_REQUEST);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_content_type(&response, "application/json");
        let envelope: Envelope<()> = get_response_json(response).await;
        assert_eq!(envelope, Envelope::fail("invalid transaction id"));
    }
}
