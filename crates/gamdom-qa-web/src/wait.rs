//! Polling with a deadline

use crate::error::{Error, Result};
use std::future::Future;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Poll `probe` until it yields `Some`, or fail with [`Error::Timeout`].
///
/// Probe errors count as "not yet": the DOM may be mid-navigation.
pub(crate) async fn poll_until<T, F, Fut>(what: &str, timeout: Duration, mut probe: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let outcome = tokio::time::timeout(timeout, async {
        loop {
            match probe().await {
                Ok(Some(value)) => return value,
                Ok(None) => {}
                Err(e) => tracing::debug!("Probe for {} failed: {}", what, e),
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    })
    .await;

    outcome.map_err(|_| Error::Timeout {
        what: what.to_string(),
        timeout,
    })
}
