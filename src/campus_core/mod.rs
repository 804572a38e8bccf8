pub mod content;
pub mod conversation;
pub mod responder;
pub mod types;

pub use content::CategoryBrowser;
pub use conversation::Conversation;
pub use types::{Message, Sender};
