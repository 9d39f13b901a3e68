//! Gamdom QA Jira
//!
//! REST client, wire types and test data factories for the issue tracker.

pub mod auth;
pub mod client;
pub mod error;
pub mod factory;
pub mod types;

pub use auth::JiraAuth;
pub use client::JiraClient;
pub use error::{Error, Result};
pub use factory::{IssueFactory, IssueOverrides};
pub use types::*;
