//! Conflicts between local rules and the remote rule set.

use serde::{Deserialize, Serialize};

use crate::id::RuleId;
use crate::rule::AccountingRule;

/// A local rule that contradicts the remote definition of the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConflict {
    pub local_id: RuleId,
    pub local_data: AccountingRule,
    pub remote_data: AccountingRule,
}

/// Which side wins when resolving a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveUsing {
    Local,
    Remote,
}

impl SolveUsing {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolveUsing::Local => "local",
            SolveUsing::Remote => "remote",
        }
    }
}

impl core::str::FromStr for SolveUsing {
    type Err = crate::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(SolveUsing::Local),
            "remote" => Ok(SolveUsing::Remote),
            _ => Err(crate::DomainError::validation(
                "solve_using must be one of: local, remote",
            )),
        }
    }
}

/// Decision for a single conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictDecision {
    pub local_id: RuleId,
    pub solve_using: SolveUsing,
}

/// Body of `PATCH /accounting/rules/conflicts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConflictResolution {
    /// Resolve the listed conflicts individually.
    Selected { conflicts: Vec<ConflictDecision> },
    /// Resolve every pending conflict the same way.
    All { solve_all_using: SolveUsing },
}

impl ConflictResolution {
    pub fn all(solve_using: SolveUsing) -> Self {
        Self::All {
            solve_all_using: solve_using,
        }
    }

    pub fn selected(conflicts: impl IntoIterator<Item = ConflictDecision>) -> Self {
        Self::Selected {
            conflicts: conflicts.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blanket_resolution_wire_shape() {
        let body = serde_json::to_value(ConflictResolution::all(SolveUsing::Remote)).unwrap();
        assert_eq!(body, json!({ "solve_all_using": "remote" }));
    }

    #[test]
    fn selected_resolution_wire_shape() {
        let body = serde_json::to_value(ConflictResolution::selected([
            ConflictDecision {
                local_id: RuleId::new(4),
                solve_using: SolveUsing::Local,
            },
            ConflictDecision {
                local_id: RuleId::new(9),
                solve_using: SolveUsing::Remote,
            },
        ]))
        .unwrap();

        assert_eq!(
            body,
            json!({
                "conflicts": [
                    { "local_id": 4, "solve_using": "local" },
                    { "local_id": 9, "solve_using": "remote" },
                ]
            })
        );
    }

    #[test]
    fn parses_solve_using_case_insensitively() {
        assert_eq!("Remote".parse::<SolveUsing>().unwrap(), SolveUsing::Remote);
        assert!("both".parse::<SolveUsing>().is_err());
    }

    #[test]
    fn conflict_ignores_extra_local_fields() {
        let rule = json!({
            "taxable": { "value": true },
            "count_entire_amount_spend": { "value": false },
            "count_cost_basis_pnl": { "value": true },
            "accounting_treatment": null,
            "event_type": "spend",
            "event_subtype": "fee",
            "counterparty": null,
        });
        let mut local = rule.clone();
        local["identifier"] = json!(12);

        let conflict: RuleConflict = serde_json::from_value(json!({
            "local_id": 12,
            "local_data": local,
            "remote_data": rule,
        }))
        .unwrap();

        assert_eq!(conflict.local_id, RuleId::new(12));
        assert_eq!(conflict.local_data, conflict.remote_data);
    }
}
