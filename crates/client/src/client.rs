//! HTTP facade for `/accounting/rules` and its sub-resources.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use acctrules_core::{
    AccountingRule, AccountingRuleEntry, Collection, ConflictQuery, ConflictResolution,
    LinkedRuleMapping, RuleConflict, RuleId, RuleQuery, select_best_rule,
};

use crate::config::ClientConfig;
use crate::envelope::{ActionResult, handle_response};
use crate::error::ClientError;

const RULES_PATH: &str = "/accounting/rules";
const RULES_INFO_PATH: &str = "/accounting/rules/info";
const CONFLICTS_PATH: &str = "/accounting/rules/conflicts";

#[derive(Debug, Serialize)]
struct DeleteRule {
    identifier: RuleId,
}

/// Client for the accounting rules endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct AccountingRulesClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl AccountingRulesClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured transport (proxies, TLS roots, timeouts).
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the rule that applies to an event for `counterparty`.
    ///
    /// The query's counterparty filter is replaced so that the server returns
    /// the counterparty-specific rule together with the general one; the best
    /// of those is picked with [`select_best_rule`]. `Ok(None)` means no rule
    /// applies.
    pub async fn fetch_rule(
        &self,
        query: &RuleQuery,
        counterparty: Option<&str>,
    ) -> Result<Option<AccountingRuleEntry>, ClientError> {
        let query = query.clone().with_counterparty_fallback(counterparty);
        let data: Collection<AccountingRuleEntry> =
            self.send(Method::POST, RULES_PATH, Some(&query)).await?;

        let best = select_best_rule(&data.entries, counterparty).cloned();
        tracing::debug!(
            candidates = data.entries.len(),
            found = ?best.as_ref().map(|e| e.identifier.get()),
            "resolved accounting rule"
        );
        Ok(best)
    }

    pub async fn list_rules(
        &self,
        query: &RuleQuery,
    ) -> Result<Collection<AccountingRuleEntry>, ClientError> {
        self.send(Method::POST, RULES_PATH, Some(query)).await
    }

    pub async fn add_rule(&self, rule: &AccountingRule) -> Result<bool, ClientError> {
        self.send(Method::PUT, RULES_PATH, Some(rule)).await
    }

    pub async fn edit_rule(&self, entry: &AccountingRuleEntry) -> Result<bool, ClientError> {
        self.send(Method::PATCH, RULES_PATH, Some(entry)).await
    }

    /// Delete by identifier. The identifier travels in the body, not the path.
    pub async fn delete_rule(&self, identifier: RuleId) -> Result<bool, ClientError> {
        self.send(Method::DELETE, RULES_PATH, Some(&DeleteRule { identifier }))
            .await
    }

    /// Rule categories and the identifiers linked to each.
    pub async fn linked_mapping(&self) -> Result<LinkedRuleMapping, ClientError> {
        self.send(Method::GET, RULES_INFO_PATH, None::<&()>).await
    }

    pub async fn list_conflicts(
        &self,
        query: &ConflictQuery,
    ) -> Result<Collection<RuleConflict>, ClientError> {
        self.send(Method::POST, CONFLICTS_PATH, Some(query)).await
    }

    pub async fn resolve_conflicts(
        &self,
        resolution: &ConflictResolution,
    ) -> Result<bool, ClientError> {
        self.send(Method::PATCH, CONFLICTS_PATH, Some(resolution))
            .await
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint(path);
        let mut req = self.http.request(method.clone(), &url);

        if let Some(token) = self.config.token() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        tracing::debug!(%method, path, status, "accounting rules request completed");

        if !self.config.is_valid_status(status) {
            tracing::warn!(%method, path, status, "unexpected status from accounting rules API");
            return Err(ClientError::UnexpectedStatus { status, body: text });
        }

        let envelope: ActionResult<T> = serde_json::from_str(&text)?;
        if envelope.result.is_none() {
            tracing::warn!(%method, path, status, message = %envelope.message, "request rejected");
        }
        handle_response(status, envelope)
    }
}
