//! `acctrules-core`: accounting rule domain types.
//!
//! This crate contains **pure** types and logic (no IO, no HTTP). The HTTP
//! facade lives in `acctrules-client`.

pub mod collection;
pub mod conflict;
pub mod error;
pub mod id;
pub mod query;
pub mod resolver;
pub mod rule;

pub use collection::{Collection, LinkedRuleMapping};
pub use conflict::{ConflictDecision, ConflictResolution, RuleConflict, SolveUsing};
pub use error::{DomainError, DomainResult};
pub use id::RuleId;
pub use query::{ConflictQuery, Pagination, RuleQuery, SortOrder};
pub use resolver::select_best_rule;
pub use rule::{
    AccountingRule, AccountingRuleEntry, AccountingTreatment, CounterpartyScoped, LinkedProperty,
};
