//! Shared application state for the HTTP handlers.

use mockable::Clock;
use std::sync::Arc;

use crate::identity::IdentityProvider;
use crate::notification::Notifier;
use crate::task::{ports::TaskStore, services::TaskBoardService};

/// Dependencies shared across the HTTP handlers.
pub struct AppState<S, N, C, I>
where
    S: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
    I: IdentityProvider,
{
    service: TaskBoardService<S, N, C>,
    identity: Arc<I>,
    allowed_origin: String,
}

impl<S, N, C, I> AppState<S, N, C, I>
where
    S: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
    I: IdentityProvider,
{
    /// Creates the shared state.
    #[must_use]
    pub const fn new(
        service: TaskBoardService<S, N, C>,
        identity: Arc<I>,
        allowed_origin: String,
    ) -> Self {
        Self {
            service,
            identity,
            allowed_origin,
        }
    }

    /// Returns the task service.
    #[must_use]
    pub const fn service(&self) -> &TaskBoardService<S, N, C> {
        &self.service
    }

    /// Returns the identity provider.
    #[must_use]
    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Returns the allowed cross-origin caller URL.
    #[must_use]
    pub fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }
}

impl<S, N, C, I> Clone for AppState<S, N, C, I>
where
    S: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
    I: IdentityProvider,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            identity: Arc::clone(&self.identity),
            allowed_origin: self.allowed_origin.clone(),
        }
    }
}
