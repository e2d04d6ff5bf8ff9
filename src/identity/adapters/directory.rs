//! Static bearer-token directory for local development and tests.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::identity::{
    domain::Caller,
    ports::{IdentityError, IdentityProvider, IdentityResult},
};

/// Identity provider backed by a fixed token-to-caller map.
///
/// Stands in for the managed identity provider in local development and
/// tests; a deployment verifying signed tokens implements the same port.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenDirectory {
    callers: HashMap<String, Caller>,
}

impl StaticTokenDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a caller under the given bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, caller: Caller) -> Self {
        self.callers.insert(token.into(), caller);
        self
    }
}

#[async_trait]
impl IdentityProvider for StaticTokenDirectory {
    async fn resolve(&self, bearer_token: &str) -> IdentityResult<Caller> {
        self.callers
            .get(bearer_token)
            .cloned()
            .ok_or(IdentityError::UnknownCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::domain::ADMIN_GROUP;
    use rstest::rstest;

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn resolves_registered_token() {
        let directory = StaticTokenDirectory::new()
            .with_token("admin-token", Caller::new("admin@example.com", [ADMIN_GROUP]));

        let caller = directory
            .resolve("admin-token")
            .await
            .expect("token should resolve");

        assert_eq!(caller.email(), "admin@example.com");
        assert!(caller.is_admin());
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn rejects_unknown_token() {
        let directory = StaticTokenDirectory::new();

        let result = directory.resolve("missing").await;

        assert!(matches!(result, Err(IdentityError::UnknownCredential)));
    }

    #[rstest]
    fn membership_of_other_groups_is_not_admin() {
        let caller = Caller::new("member@example.com", ["TeamMembers"]);
        assert!(!caller.is_admin());
    }
}
