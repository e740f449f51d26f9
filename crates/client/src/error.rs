/// Failure of a client operation.
///
/// A rule lookup that finds nothing is not an error; see
/// [`crate::AccountingRulesClient::fetch_rule`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("parse error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected status ({status}): {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("invalid configuration: {0}")]
    Config(String),
}
