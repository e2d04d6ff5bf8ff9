//! Task lifecycle management for Taskboard.
//!
//! This module implements the task-assignment core: admin-only task creation,
//! role-scoped listing, and the authorized partial-update engine. Admins may
//! patch any mutable field of any task; a non-admin assignee may change only
//! the task status. Status transitions themselves are deliberately
//! unconstrained. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
