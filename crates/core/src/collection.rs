use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Paginated listing returned by the collection endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection<T> {
    pub entries: Vec<T>,
    /// Entries matching the filter.
    pub entries_found: u64,
    /// Entries in the table regardless of the filter.
    pub entries_total: u64,
    /// Server-side cap on returned entries; `-1` means unlimited.
    pub entries_limit: i64,
}

impl<T> Collection<T> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Rule category (linked setting name) to the identifiers linked to it.
pub type LinkedRuleMapping = BTreeMap<String, Vec<String>>;
