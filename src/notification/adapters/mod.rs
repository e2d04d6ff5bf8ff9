//! Adapter implementations of the notifier port.

mod log;
mod recording;

pub use log::LogNotifier;
pub use recording::RecordingNotifier;
