//! Client configuration.

use crate::envelope::DEFAULT_VALID_STATUSES;
use crate::error::ClientError;

/// Base URL of the backend API, including its version prefix.
pub const API_URL_ENV: &str = "ACCTRULES_API_URL";
/// Optional bearer token sent with every request.
pub const API_TOKEN_ENV: &str = "ACCTRULES_API_TOKEN";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:4242/api/1";

#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    token: Option<String>,
    valid_statuses: Vec<u16>,
}

impl ClientConfig {
    /// Create a configuration for `base_url` (trailing slashes are dropped).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');

        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|e| ClientError::Config(format!("invalid base url {trimmed:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "unsupported scheme {:?} in base url",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            token: None,
            valid_statuses: DEFAULT_VALID_STATUSES.to_vec(),
        })
    }

    /// Build from [`API_URL_ENV`] and [`API_TOKEN_ENV`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by `from_env`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_ENV).unwrap_or_else(|| {
            tracing::debug!("{API_URL_ENV} not set; using {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });

        let config = Self::new(base_url)?;
        Ok(match lookup(API_TOKEN_ENV).filter(|t| !t.is_empty()) {
            Some(token) => config.with_token(token),
            None => config,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace the set of statuses whose bodies are read as an envelope.
    pub fn with_valid_statuses(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.valid_statuses = statuses.into_iter().collect();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_valid_status(&self, status: u16) -> bool {
        self.valid_statuses.contains(&status)
    }

    /// Absolute URL of `path` (which starts with `/`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl core::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("valid_statuses", &self.valid_statuses)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert_eq!(config.token(), None);
        assert!(config.is_valid_status(200));
        assert!(config.is_valid_status(400));
        assert!(config.is_valid_status(409));
        assert!(!config.is_valid_status(500));
    }

    #[test]
    fn reads_url_and_token() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_URL_ENV, "https://rotki.local/api/1/"),
            (API_TOKEN_ENV, "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.base_url(), "https://rotki.local/api/1");
        assert_eq!(config.token(), Some("s3cret"));
        assert_eq!(
            config.endpoint("/accounting/rules"),
            "https://rotki.local/api/1/accounting/rules"
        );
    }

    #[test]
    fn empty_token_is_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[(API_TOKEN_ENV, "")])).unwrap();
        assert_eq!(config.token(), None);
    }

    #[test]
    fn rejects_malformed_urls() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("ftp://example.com"),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn debug_output_hides_token() {
        let config = ClientConfig::new(DEFAULT_API_URL).unwrap().with_token("s3cret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn valid_statuses_can_be_replaced() {
        let config = ClientConfig::new(DEFAULT_API_URL)
            .unwrap()
            .with_valid_statuses([200, 502]);
        assert!(config.is_valid_status(502));
        assert!(!config.is_valid_status(409));
    }
}
