//! Progress reporting for long-running workflow operations.
//!
//! Callers may pass an observer that is notified at fixed checkpoints.
//! Notifications are awaited one after another before the workflow
//! proceeds; there is no concurrency. A failing observer aborts the
//! operation through the normal error path.

use crate::error::Result;
use async_trait::async_trait;

/// Observer notified about workflow progress.
///
/// Implementations typically print to a terminal or forward the values to
/// a client over a protocol connection.
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// Reports progress out of a total, with a short status message.
    ///
    /// # Errors
    ///
    /// An error returned here propagates into the running workflow and
    /// aborts it.
    async fn report(&self, progress: u64, total: u64, message: &str) -> anyhow::Result<()>;
}

/// Notifies the reporter if one is present.
pub(crate) async fn report_progress(
    reporter: Option<&dyn ProgressReporter>,
    progress: u64,
    total: u64,
    message: &str,
) -> Result<()> {
    if let Some(reporter) = reporter {
        reporter.report(progress, total, message).await?;
    }
    Ok(())
}
