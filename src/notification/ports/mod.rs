//! Port contract for best-effort email dispatch.

use crate::notification::domain::EmailMessage;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notifier operations.
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Fire-and-forget email dispatch contract.
///
/// Implementations report failures through the result, but callers treat
/// every failure as non-fatal: it is logged and swallowed, never propagated
/// to the client request.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends the given email.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError`] when dispatch fails.
    async fn send(&self, message: &EmailMessage) -> NotifierResult<()>;
}

/// Errors returned by notifier implementations.
#[derive(Debug, Clone, Error)]
pub enum NotifierError {
    /// The underlying email service rejected or failed the send.
    #[error("email dispatch failed: {0}")]
    Dispatch(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotifierError {
    /// Wraps a dispatch failure.
    pub fn dispatch(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Dispatch(Arc::new(err))
    }
}
