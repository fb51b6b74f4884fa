//! Interpretation of inventory API responses.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status is a failure regardless of body; a 2xx body that does
//! not parse as the expected type is a failure too. Callers in the browser
//! collapse both into "nothing happened", the CLI reports them.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The server answered with a non-success status.
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    /// The body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Whether `status` is a 2xx success.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a response body as `T`, failing on any non-2xx status.
///
/// # Errors
///
/// Returns [`ResponseError::Status`] for non-2xx statuses and
/// [`ResponseError::Malformed`] when the body does not parse as `T`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ResponseError> {
    if !is_success(status) {
        return Err(ResponseError::Status { status, body: body.to_owned() });
    }
    Ok(serde_json::from_str(body)?)
}

/// Body of a create call: either the record itself or the record wrapped in
/// a resource-named envelope (`{"equipment": {...}}`, `{"chemical": {...}}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Created<T> {
    Equipment { equipment: T },
    Chemical { chemical: T },
    Bare(T),
}

impl<T> Created<T> {
    /// The created record, whichever envelope carried it.
    pub fn into_record(self) -> T {
        match self {
            Self::Equipment { equipment } => equipment,
            Self::Chemical { chemical } => chemical,
            Self::Bare(record) => record,
        }
    }
}

/// Decode a create response, unwrapping whichever envelope it uses.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_created<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ResponseError> {
    decode::<Created<T>>(status, body).map(Created::into_record)
}
