//! The `{ "result": ..., "message": ... }` envelope wrapping every response.

use serde::Deserialize;

use crate::error::ClientError;

/// Status codes whose bodies are read as an envelope by default.
///
/// 400 and 409 carry a `message` explaining why `result` is null.
pub const DEFAULT_VALID_STATUSES: [u16; 3] = [200, 400, 409];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionResult<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub message: String,
}

/// Unwrap an envelope received with `status`.
pub fn handle_response<T>(status: u16, envelope: ActionResult<T>) -> Result<T, ClientError> {
    match envelope.result {
        Some(result) => Ok(result),
        None if status == 400 => Err(ClientError::Validation(envelope.message)),
        None => Err(ClientError::Api {
            status,
            message: envelope.message,
        }),
    }
}
