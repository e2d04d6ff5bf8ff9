//! Adapter implementations of the identity provider port.

mod directory;

pub use directory::StaticTokenDirectory;
