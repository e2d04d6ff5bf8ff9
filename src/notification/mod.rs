//! Email notifications for task events.
//!
//! Two kinds of notification exist: `assigned`, sent once at task creation
//! to the assignee, and `updated`, sent to at most one recipient per update.
//! Rendering and dispatch are strictly best-effort: failures are logged by
//! the caller and never surface to the client request.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{LogNotifier, RecordingNotifier};
pub use domain::{EmailMessage, NotificationError, NotificationKind, format_deadline, render};
pub use ports::{Notifier, NotifierError, NotifierResult};
