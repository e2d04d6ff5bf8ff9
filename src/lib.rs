//! Taskboard: a role-based task assignment service.
//!
//! This crate provides the core functionality for creating, listing, and
//! updating assigned tasks, enforcing admin/assignee authorization, and
//! dispatching best-effort email notifications for task events.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, identity, email)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, authorization, and partial-update engine
//! - [`identity`]: Caller principals and bearer-credential resolution
//! - [`notification`]: Email templates and best-effort dispatch
//! - [`http`]: The JSON-over-HTTP surface
//! - [`config`]: Environment-driven runtime configuration

pub mod config;
pub mod http;
pub mod identity;
pub mod notification;
pub mod task;
