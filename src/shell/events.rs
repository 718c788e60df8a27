//! UI message queue
//!
//! Workers never touch shell state. They post a `ShellMessage` here and the
//! UI loop applies it on its own task.

use tokio::sync::mpsc;

use crate::pipeline::Recommendations;

/// Messages delivered to the UI loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellMessage {
    /// Worker finished; carries the text for both panes
    Completed(Recommendations),
}

/// Sending half handed to workers
#[derive(Debug, Clone)]
pub struct UiSender {
    sender: mpsc::UnboundedSender<ShellMessage>,
}

impl UiSender {
    /// Post a message to the UI loop
    ///
    /// Returns false when the UI loop has gone away.
    pub fn post(&self, message: ShellMessage) -> bool {
        self.sender.send(message).is_ok()
    }
}

/// Create a connected sender/receiver pair
pub fn channel() -> (UiSender, mpsc::UnboundedReceiver<ShellMessage>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (UiSender { sender }, receiver)
}
