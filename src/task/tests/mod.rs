//! Unit tests for the task domain, adapters, and services.

mod store_tests;
