//! Caller principals and bearer-credential resolution.
//!
//! The authentication boundary resolves a bearer credential once into a
//! [`Caller`] value, which every task operation then receives as a plain
//! parameter. Token verification itself lives behind the
//! [`IdentityProvider`] port; the shipped adapter is a static token
//! directory suitable for local development and tests.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::StaticTokenDirectory;
pub use domain::{ADMIN_GROUP, Caller};
pub use ports::{IdentityError, IdentityProvider, IdentityResult};
