//! Request payloads for the listing endpoints.
//!
//! Sorting is applied client-side by callers (e.g. a table view); the server
//! does not accept it. [`SortOrder`] is therefore carried on the payloads but
//! never serialized.

use serde::{Deserialize, Serialize};

use crate::id::RuleId;

/// Page window, passed through to the server as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Pagination {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Client-only sorting state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub order_by_attributes: Vec<String>,
    pub ascending: Vec<bool>,
}

impl SortOrder {
    pub fn by(attribute: impl Into<String>, ascending: bool) -> Self {
        Self {
            order_by_attributes: vec![attribute.into()],
            ascending: vec![ascending],
        }
    }
}

/// Filter for `POST /accounting/rules`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleQuery {
    #[serde(flatten)]
    pub page: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_subtypes: Option<Vec<String>>,
    /// `None` entries select rules without a counterparty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparties: Option<Vec<Option<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<RuleId>>,
    #[serde(skip)]
    pub sort: SortOrder,
}

impl RuleQuery {
    pub fn new(page: Pagination) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Narrow to a single event type/subtype pair.
    pub fn for_event(
        page: Pagination,
        event_type: impl Into<String>,
        event_subtype: impl Into<String>,
    ) -> Self {
        Self {
            page,
            event_types: Some(vec![event_type.into()]),
            event_subtypes: Some(vec![event_subtype.into()]),
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Replace the counterparty filter so the server returns both the
    /// counterparty-specific rule and the general one.
    ///
    /// An empty counterparty is treated as "no counterparty".
    pub fn with_counterparty_fallback(mut self, counterparty: Option<&str>) -> Self {
        self.counterparties = Some(match counterparty {
            Some(cp) if !cp.is_empty() => vec![Some(cp.to_string()), None],
            _ => vec![None],
        });
        self
    }
}

/// Filter for `POST /accounting/rules/conflicts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictQuery {
    #[serde(flatten)]
    pub page: Pagination,
    #[serde(skip)]
    pub sort: SortOrder,
}

impl ConflictQuery {
    pub fn new(page: Pagination) -> Self {
        Self {
            page,
            sort: SortOrder::default(),
        }
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}
