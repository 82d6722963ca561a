use chrono::{DateTime, Local};
use uuid::Uuid;

/// Unique identifier assigned to each submitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

/// A message in the panel's list. Only `like_count` ever changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: String,
    pub text: String,
    pub like_count: u64,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender: sender.into(),
            text: text.into(),
            like_count: 0,
            sent_at: Local::now(),
        }
    }

    /// Adds one like and returns the new count.
    pub fn like(&mut self) -> u64 {
        self.like_count = self.like_count.saturating_add(1);
        self.like_count
    }

    /// Hour and minute the message was sent, e.g. `09:05`.
    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}
