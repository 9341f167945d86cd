use async_trait::async_trait;
use thiserror::Error;

/// Runs once at startup, after slash-command registration and before the
/// bot serves interactions: rebuilds the live component routing from the
/// durable store.
#[async_trait]
pub trait ReattachmentPort {
    async fn reattach(&self) -> Result<ReattachmentReport, ReattachmentError>;
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReattachmentReport {
    pub buttons: usize,
    pub selectors: usize,
    /// Bindings whose channel or every role stopped resolving.
    pub skipped: usize,
}

#[derive(Debug, Error)]
pub enum ReattachmentError {
    /// The persisted state is unreadable; startup must abort.
    #[error("Stored bindings are corrupt: {0}")]
    StorageCorrupt(String),
    #[error("Service is temporarily unavailable")]
    TemporaryUnavailable,
}
