//! Notifier that records every send for assertion in tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::notification::{
    domain::EmailMessage,
    ports::{Notifier, NotifierError, NotifierResult},
};

/// Notifier that captures dispatched messages in memory.
///
/// Configurable to fail every send, for exercising the best-effort
/// dispatch paths.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<EmailMessage>>>,
    failing: bool,
}

impl RecordingNotifier {
    /// Creates a notifier that records and succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notifier that fails every send.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            failing: true,
        }
    }

    /// Returns a snapshot of every message sent so far.
    #[must_use]
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent
            .read()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &EmailMessage) -> NotifierResult<()> {
        if self.failing {
            return Err(NotifierError::dispatch(std::io::Error::other(
                "notifier configured to fail",
            )));
        }
        let mut sent = self
            .sent
            .write()
            .map_err(|err| NotifierError::dispatch(std::io::Error::other(err.to_string())))?;
        sent.push(message.clone());
        Ok(())
    }
}
