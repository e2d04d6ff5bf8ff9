//! Port contract for resolving bearer credentials to principals.

use crate::identity::domain::Caller;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity resolution.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Resolves a bearer credential to the principal it represents.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves the given bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::UnknownCredential`] when the token does not
    /// resolve to a principal, or [`IdentityError::Provider`] when the
    /// provider itself fails.
    async fn resolve(&self, bearer_token: &str) -> IdentityResult<Caller>;
}

/// Errors returned by identity providers.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The credential is missing, malformed, or expired.
    #[error("invalid or expired credential")]
    UnknownCredential,

    /// The identity provider is unreachable or erroring.
    #[error("identity provider failure: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a provider failure.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
