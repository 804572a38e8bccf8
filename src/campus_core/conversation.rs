use std::time::Duration;

use super::responder;
use super::types::{Message, QuickAction};

/// How long the assistant "thinks" between a send and its reply.
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);

pub static WELCOME: &str = "Welcome! I'm your Campus AI Assistant. I can help you with schedules, facilities, dining, library services, events, and administrative procedures. What would you like to know?";

pub static QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "library hours",
        query: "What are the library hours?",
    },
    QuickAction {
        label: "eat on campus",
        query: "Where can I eat on campus?",
    },
    QuickAction {
        label: "register for classes",
        query: "How do I register for classes?",
    },
    QuickAction {
        label: "events this week",
        query: "Campus events this week?",
    },
];

/// Transcript plus composing state for one chat session.
///
/// The struct holds no timers: `send` records the user message and
/// hands back the accepted text, the caller schedules [`compose_reply`]
/// on whatever executor owns the session, and the resulting reply comes
/// back in through `deliver`. Tearing the owner down drops any
/// scheduled reply before it can touch the transcript.
pub struct Conversation {
    messages: Vec<Message>,
    pending_replies: usize,
}

impl Conversation {
    /// A fresh transcript, seeded with the assistant's greeting.
    pub fn new() -> Conversation {
        Conversation {
            messages: vec![Message::bot(WELCOME)],
            pending_replies: 0,
        }
    }

    /// Records a user message and returns the text a reply should be
    /// composed against. Drafts that trim to nothing are rejected and
    /// leave the transcript untouched.
    pub fn send(&mut self, draft: &str) -> Option<String> {
        let text = draft.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(Message::user(text));
        self.pending_replies += 1;
        Some(text.to_owned())
    }

    /// Appends a finished reply. Replies land in the order they are
    /// delivered, one per accepted send.
    pub fn deliver(&mut self, reply: impl Into<String>) {
        self.messages.push(Message::bot(reply));
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }

    /// True while at least one reply is still on its way; drives the
    /// typing indicator.
    pub fn is_composing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for Conversation {
    fn default() -> Conversation {
        Conversation::new()
    }
}

/// Waits out [`REPLY_DELAY`], then resolves the query to its canned
/// answer. The sleep is the only suspension point in the send cycle;
/// dropping the future cancels the reply.
pub async fn compose_reply(query: &str) -> String {
    tokio::time::sleep(REPLY_DELAY).await;
    responder::respond(query).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus_core::types::Sender;
    use pretty_assertions::assert_eq;

    fn texts(conversation: &Conversation) -> Vec<&str> {
        conversation
            .messages()
            .iter()
            .map(|msg| msg.text.as_str())
            .collect()
    }

    #[test]
    fn starts_with_the_greeting_only() {
        let conversation = Conversation::new();
        assert_eq!(texts(&conversation), vec![WELCOME]);
        assert_eq!(conversation.messages()[0].sender, Sender::Bot);
        assert!(!conversation.is_composing());
    }

    #[test]
    fn blank_drafts_are_rejected() {
        let mut conversation = Conversation::new();
        assert_eq!(conversation.send(""), None);
        assert_eq!(conversation.send("   "), None);
        assert_eq!(conversation.send("\n\t"), None);
        assert_eq!(conversation.messages().len(), 1);
        assert!(!conversation.is_composing());
    }

    #[test]
    fn send_appends_user_message_before_any_reply() {
        let mut conversation = Conversation::new();
        let query = conversation.send("  What are the library hours?  ");
        assert_eq!(query.as_deref(), Some("What are the library hours?"));
        assert_eq!(
            texts(&conversation),
            vec![WELCOME, "What are the library hours?"],
        );
        assert_eq!(conversation.messages()[1].sender, Sender::User);
        assert!(conversation.is_composing());
    }

    #[test]
    fn transcript_is_strictly_insertion_ordered() {
        let mut conversation = Conversation::new();
        conversation.send("first");
        conversation.send("second");
        conversation.deliver("reply one");
        conversation.deliver("reply two");
        let stamps: Vec<_> = conversation
            .messages()
            .iter()
            .map(|msg| msg.sent_at)
            .collect();
        let mut sorted = stamps.clone();
        sorted.sort();
        assert_eq!(stamps, sorted);
    }

    #[test]
    fn composing_clears_once_all_replies_land() {
        let mut conversation = Conversation::new();
        conversation.send("one");
        conversation.send("two");
        assert!(conversation.is_composing());
        conversation.deliver("a");
        assert!(conversation.is_composing());
        conversation.deliver("b");
        assert!(!conversation.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn unmatched_send_yields_one_generic_reply_after_the_delay() {
        let mut conversation = Conversation::new();
        let query = conversation.send("hello").expect("accepted");

        let before = tokio::time::Instant::now();
        let reply = compose_reply(&query).await;
        assert_eq!(before.elapsed(), REPLY_DELAY);

        conversation.deliver(reply);
        assert_eq!(conversation.messages().len(), 3);
        assert_eq!(
            conversation.messages()[2].text,
            responder::respond("hello"),
        );
        assert!(!conversation.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_sends_reply_in_send_order() {
        let mut conversation = Conversation::new();
        let first = conversation.send("What are the library hours?").unwrap();
        let second = conversation.send("Is the food court open today?").unwrap();
        assert_eq!(conversation.messages().len(), 3);

        // Equal fixed delays resolve in start order.
        let (reply_one, reply_two) =
            tokio::join!(compose_reply(&first), compose_reply(&second));
        conversation.deliver(reply_one);
        conversation.deliver(reply_two);

        assert_eq!(conversation.messages().len(), 5);
        assert_eq!(
            conversation.messages()[3].text,
            responder::respond("What are the library hours?"),
        );
        assert_eq!(
            conversation.messages()[4].text,
            responder::respond("Is the food court open today?"),
        );
        assert!(!conversation.is_composing());
    }

    #[test]
    fn quick_actions_go_through_the_ordinary_send_path() {
        let mut typed = Conversation::new();
        let mut picked = Conversation::new();
        let action = &QUICK_ACTIONS[0];
        let from_typing = typed.send(action.query);
        let from_button = picked.send(action.query);
        assert_eq!(from_typing, from_button);
        assert_eq!(texts(&typed), texts(&picked));
    }
}
