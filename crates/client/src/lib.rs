//! `acctrules-client`
//!
//! **Responsibility:** typed async facade over the accounting rules HTTP
//! resource.
//!
//! The client forwards payloads and unwraps the result envelope. It adds no
//! retries, caching or error translation; the only decision it makes is which
//! rule to return from [`AccountingRulesClient::fetch_rule`].

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;

pub use client::AccountingRulesClient;
pub use config::ClientConfig;
pub use envelope::{ActionResult, DEFAULT_VALID_STATUSES};
pub use error::ClientError;
