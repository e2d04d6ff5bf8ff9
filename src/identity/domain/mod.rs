//! Principal values for the authorization rules.

use serde::{Deserialize, Serialize};

/// Group name whose members hold the admin role.
pub const ADMIN_GROUP: &str = "Admins";

/// An authenticated principal: an email identifier plus group memberships.
///
/// Membership of [`ADMIN_GROUP`] grants the admin role; its absence implies
/// the default team-member role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    email: String,
    groups: Vec<String>,
}

impl Caller {
    /// Creates a caller from an email identifier and group memberships.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        groups: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            email: email.into(),
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the caller's email identifier.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the caller's group memberships.
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Returns `true` when the caller holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.groups.iter().any(|group| group == ADMIN_GROUP)
    }
}
