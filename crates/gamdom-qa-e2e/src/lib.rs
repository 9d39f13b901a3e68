//! Gamdom QA E2E
//!
//! Per-test fixtures for the API and UI suites, and the issue lifecycle
//! context that carries the generated key between CRUD steps.

pub mod fixtures;
pub mod lifecycle;

pub use fixtures::{ApiFixture, UiFixture};
pub use lifecycle::{issue_key_pattern, IssueLifecycle};

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-friendly subscriber once per process
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
