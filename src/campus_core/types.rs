use chrono::{DateTime, Local};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry in a chat transcript. Entries are appended and never edited.
#[derive(Clone, Debug)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Message {
        Message {
            sender,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Message {
        Message::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Message {
        Message::new(Sender::Bot, text)
    }

    /// Wall-clock stamp shown next to the bubble.
    pub fn stamp(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

/// A preauthored query wired to a shortcut button in the chat widget.
/// Picking one goes through the same send path as typed input.
pub struct QuickAction {
    pub label: &'static str,
    pub query: &'static str,
}
