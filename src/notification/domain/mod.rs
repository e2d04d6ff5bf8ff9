//! Notification kinds and template rendering.

use crate::task::domain::Task;
use chrono::{DateTime, NaiveDate};
use minijinja::{Environment, context};
use thiserror::Error;

/// Body template for the `assigned` notification.
const ASSIGNED_TEMPLATE: &str = r"<h2>New Task Assigned</h2>
<p>You have been assigned a new task:</p>
<ul>
  <li><strong>Title:</strong> {{ title }}</li>
  <li><strong>Description:</strong> {{ description }}</li>
  <li><strong>Priority:</strong> {{ priority }}</li>
  <li><strong>Deadline:</strong> {{ deadline }}</li>
</ul>
<p>Please log in to the Task Management System to view more details.</p>";

/// Body template for the `updated` notification.
const UPDATED_TEMPLATE: &str = r"<h2>Task Updated</h2>
<p>A task has been updated:</p>
<ul>
  <li><strong>Title:</strong> {{ title }}</li>
  <li><strong>Description:</strong> {{ description }}</li>
  <li><strong>Status:</strong> {{ status }}</li>
  <li><strong>Priority:</strong> {{ priority }}</li>
  <li><strong>Deadline:</strong> {{ deadline }}</li>
</ul>
<p>Please log in to the Task Management System to view more details.</p>";

/// Placeholder shown when a task has no description.
const NO_DESCRIPTION: &str = "No description provided";

/// Kind of task event being notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A task was assigned at creation.
    Assigned,
    /// A task was updated.
    Updated,
}

/// A rendered email ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient email identifier.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html_body: String,
}

/// Errors returned while rendering a notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Template rendering failed.
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders the notification for the given task event.
///
/// Rendering is pure formatting over already-validated fields; a failure
/// here is logged by the caller and never fails the originating request.
///
/// # Errors
///
/// Returns [`NotificationError::Template`] when the template engine rejects
/// the render.
pub fn render(
    kind: NotificationKind,
    recipient: impl Into<String>,
    task: &Task,
) -> Result<EmailMessage, NotificationError> {
    let (subject, template) = match kind {
        NotificationKind::Assigned => (format!("New Task Assigned: {}", task.title()), ASSIGNED_TEMPLATE),
        NotificationKind::Updated => (format!("Task Updated: {}", task.title()), UPDATED_TEMPLATE),
    };

    let description = if task.description().is_empty() {
        NO_DESCRIPTION
    } else {
        task.description()
    };

    let env = Environment::new();
    let html_body = env.render_str(
        template,
        context! {
            title => task.title(),
            description => description,
            status => task.status().as_str(),
            priority => task.priority().as_str(),
            deadline => format_deadline(task.deadline()),
        },
    )?;

    Ok(EmailMessage {
        recipient: recipient.into(),
        subject,
        html_body,
    })
}

/// Formats a stored ISO-8601 deadline for human readers.
///
/// Falls back to the raw stored value when it is neither an RFC 3339
/// timestamp nor a calendar date.
#[must_use]
pub fn format_deadline(deadline: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(deadline) {
        return timestamp.format("%-d %B %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(deadline, "%Y-%m-%d") {
        return date.format("%-d %B %Y").to_string();
    }
    deadline.to_owned()
}
