//! Notifier that logs sends instead of talking to an email service.

use async_trait::async_trait;
use tracing::info;

use crate::notification::{
    domain::EmailMessage,
    ports::{Notifier, NotifierResult},
};

/// Notifier that records dispatches in the log stream.
///
/// Used when no real email backend is wired in. When no sender address is
/// configured, sends are skipped entirely, matching the behaviour of the
/// managed deployment without an outbound address.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier {
    sender: String,
}

impl LogNotifier {
    /// Creates a notifier with the given outbound sender address. An empty
    /// address means notifications are skipped.
    #[must_use]
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &EmailMessage) -> NotifierResult<()> {
        if self.sender.is_empty() {
            info!("sender email not configured, skipping notification");
            return Ok(());
        }
        info!(
            sender = %self.sender,
            recipient = %message.recipient,
            subject = %message.subject,
            "email notification sent"
        );
        Ok(())
    }
}
