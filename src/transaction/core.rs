//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize, de::Error as _};
use serde_json::{Map, Value};

/// The ID of a transaction in a [TransactionStore](crate::stores::TransactionStore).
pub type TransactionId = i64;

/// The ID of the user that made a transaction.
///
/// The ID zero is reserved for anonymous transactions, see [UserID::ANONYMOUS].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserID(i64);

impl UserID {
    /// The user ID of a transaction that was made anonymously.
    pub const ANONYMOUS: UserID = UserID(0);

    /// Create a new user ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Cast the user ID to a 64 bit integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Whether the ID refers to no user at all.
    pub fn is_anonymous(&self) -> bool {
        *self == Self::ANONYMOUS
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A purchase of one or more items.
///
/// The ID is internal to the store and is never sent to clients. To create a
/// new `Transaction`, use [Transaction::build] and insert the builder into a
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    #[serde(skip)]
    pub id: TransactionId,
    /// The user that made the transaction, [UserID::ANONYMOUS] if nobody.
    pub user_id: UserID,
    /// A short text describing the transaction.
    pub name: String,
    /// The names of the items that were bought, in order.
    pub items: Vec<String>,
    /// The total value of the transaction in the smallest unit of currency.
    pub amount: i64,
    /// When the transaction was recorded, as a unix timestamp in seconds.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub created_at: i64,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(name: &str) -> TransactionBuilder {
        TransactionBuilder {
            name: name.to_owned(),
            ..Default::default()
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// This is also the payload clients send to create a transaction. Fields
/// that are missing or `null` take their zero value and unknown fields, such
/// as `id` or `created_at`, are ignored since the store assigns those. See
/// [TransactionBuilder::from_json] for decoding a request body.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TransactionPayload")]
pub struct TransactionBuilder {
    /// The user that made the transaction.
    pub user_id: UserID,
    /// A short text describing the transaction.
    pub name: String,
    /// The names of the items that were bought.
    pub items: Vec<String>,
    /// The total value of the transaction.
    pub amount: i64,
}

/// The field names of [TransactionBuilder] as they appear in JSON.
const FIELD_NAMES: [&str; 4] = ["user_id", "name", "items", "amount"];

/// The JSON shape of [TransactionBuilder] where every field may be missing or `null`.
#[derive(Deserialize)]
struct TransactionPayload {
    user_id: Option<UserID>,
    name: Option<String>,
    items: Option<Vec<String>>,
    amount: Option<i64>,
}

impl From<TransactionPayload> for TransactionBuilder {
    fn from(payload: TransactionPayload) -> Self {
        Self {
            user_id: payload.user_id.unwrap_or_default(),
            name: payload.name.unwrap_or_default(),
            items: payload.items.unwrap_or_default(),
            amount: payload.amount.unwrap_or_default(),
        }
    }
}

impl TransactionBuilder {
    /// Decode the first JSON value in `body`.
    ///
    /// Anything after the first value is ignored. A `null` body gives an empty
    /// builder. Field names are matched case-insensitively, and a field with
    /// the exact name wins over one that only matches when ignoring case.
    ///
    /// # Errors
    /// Returns an error if the body is empty, is not a JSON object or `null`,
    /// or has a field of the wrong type.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let Some(value) = serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()
        else {
            return Err(serde_json::Error::custom("the request body is empty"));
        };

        match value? {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => serde_json::from_value(Value::Object(fold_field_names(fields))),
            _ => Err(serde_json::Error::custom(
                "the request body is not a JSON object",
            )),
        }
    }

    /// Set the user that made the transaction.
    pub fn user_id(mut self, user_id: UserID) -> Self {
        self.user_id = user_id;
        self
    }

    /// Set the items that were bought.
    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the total value of the transaction.
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    /// Build the final [Transaction] with the store assigned `id` and `created_at` timestamp.
    pub fn finalise(self, id: TransactionId, created_at: i64) -> Transaction {
        Transaction {
            id,
            user_id: self.user_id,
            name: self.name,
            items: self.items,
            amount: self.amount,
            created_at,
        }
    }
}

/// Rename fields that match a known field name when ignoring ASCII case.
fn fold_field_names(fields: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();
    let mut inexact = Vec::new();

    for (key, value) in fields {
        match FIELD_NAMES
            .iter()
            .find(|name| **name != key && name.eq_ignore_ascii_case(&key))
        {
            Some(name) => inexact.push((name.to_string(), value)),
            None => {
                folded.insert(key, value);
            }
        }
    }

    for (key, value) in inexact {
        folded.entry(key).or_insert(value);
    }

    folded
}
