use serde::{Deserialize, Serialize};

use crate::id::RuleId;

/// How an event matching the rule is processed by the accountant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountingTreatment {
    #[serde(rename = "swap")]
    Swap,
    #[serde(rename = "swap with fee")]
    SwapWithFee,
}

impl AccountingTreatment {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountingTreatment::Swap => "swap",
            AccountingTreatment::SwapWithFee => "swap with fee",
        }
    }
}

/// A boolean rule flag that can follow a global accounting setting.
///
/// When `linked_setting` is set, the server evaluates the named setting
/// instead of `value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkedProperty {
    pub value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_setting: Option<String>,
}

impl LinkedProperty {
    pub fn fixed(value: bool) -> Self {
        Self {
            value,
            linked_setting: None,
        }
    }

    pub fn linked(value: bool, setting: impl Into<String>) -> Self {
        Self {
            value,
            linked_setting: Some(setting.into()),
        }
    }

    pub fn is_linked(&self) -> bool {
        self.linked_setting.is_some()
    }
}

/// Rule body as submitted when creating a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountingRule {
    pub taxable: LinkedProperty,
    pub count_entire_amount_spend: LinkedProperty,
    pub count_cost_basis_pnl: LinkedProperty,
    #[serde(default)]
    pub accounting_treatment: Option<AccountingTreatment>,
    pub event_type: String,
    pub event_subtype: String,
    /// `None` is the general rule for the event type/subtype pair.
    #[serde(default)]
    pub counterparty: Option<String>,
}

/// A rule as stored by the server (body + identifier).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountingRuleEntry {
    pub identifier: RuleId,
    #[serde(flatten)]
    pub rule: AccountingRule,
}

impl AccountingRuleEntry {
    pub fn new(identifier: RuleId, rule: AccountingRule) -> Self {
        Self { identifier, rule }
    }
}

/// Anything that may be scoped to a counterparty.
///
/// This is the only view of a rule the resolver needs.
pub trait CounterpartyScoped {
    fn counterparty(&self) -> Option<&str>;
}

impl CounterpartyScoped for AccountingRule {
    fn counterparty(&self) -> Option<&str> {
        self.counterparty.as_deref()
    }
}

impl CounterpartyScoped for AccountingRuleEntry {
    fn counterparty(&self) -> Option<&str> {
        self.rule.counterparty.as_deref()
    }
}
