//! Gamdom QA Core
//!
//! Environment configuration and timeouts shared by the API and UI suites.

pub mod config;
pub mod error;

pub use config::{Config, JiraAuthMode, JiraConfig, Timeouts, WebConfig};
pub use error::{Error, Result};
