use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use super::components::*;
use crate::campus_core::content;
use crate::campus_core::conversation::{compose_reply, QUICK_ACTIONS};
use crate::campus_core::{CategoryBrowser, Conversation, Sender};

pub fn app(cx: Scope) -> Element {
    let conversation = use_ref(cx, Conversation::new);
    let browser = use_ref(cx, CategoryBrowser::new);
    let draft = use_ref(cx, String::new);
    let clean = use_state(cx, || false);

    // Shared send path for the button, the Enter key and the quick
    // actions. The reply future lives on this component's scope, so a
    // closed session drops it before it can touch the transcript.
    let submit = move |text: String| {
        let query = match conversation.write().send(&text) {
            Some(query) => query,
            None => return,
        };
        draft.set(String::new());
        clean.set(true);

        cx.spawn({
            to_owned![conversation];
            async move {
                let reply = compose_reply(&query).await;
                conversation.write().deliver(reply);
            }
        })
    };

    let send_button = move |_| {
        let text = draft.read().clone();
        submit(text);
    };

    let send_enter = move |e: Event<KeyboardData>| {
        if let Key::Enter = e.data.key() {
            let text = draft.read().clone();
            submit(text);
        }
    };

    let selected = browser.read().selected();

    cx.render(rsx!(
        style { include_str!("./style.css") }
        div {
            id: "header",
            h1 { "🎓 CampusAI" }
            h2 { "Your intelligent campus companion for all student services" }
        }
        div {
            id: "portal",
            div {
                id: "info-panel",
                div {
                    class: "tab-bar",
                    for category in content::CATEGORIES.iter() {
                        button {
                            class: if selected.key == category.key {
                                "campus-tab active"
                            } else {
                                "campus-tab"
                            },
                            onclick: move |_| browser.write().select(category.key),
                            "{category.label}"
                        }
                    }
                }
                h2 {
                    class: "pane-title",
                    "{selected.title}"
                }
                div {
                    class: "info-cards",
                    for entry in selected.entries.iter() {
                        InfoCard {
                            title: entry.title.to_string(),
                            body: entry.body.to_string(),
                        }
                    }
                }
            }
            div {
                id: "chat-panel",
                div {
                    class: "chat-header",
                    h2 { "🤖 Campus Assistant" }
                    p { "Ask me anything about campus services!" }
                }
                div {
                    class: "quick-actions",
                    for action in QUICK_ACTIONS.iter() {
                        button {
                            class: "quick-action",
                            onclick: move |_| submit(action.query.to_string()),
                            "{action.label}"
                        }
                    }
                }
                div {
                    id: "chat-window",
                    class: "chat-window",
                    for msg in conversation.read().messages().iter() {
                        match msg.sender {
                            Sender::User => rsx!(UserMessage {
                                content: msg.text.clone(),
                                stamp: msg.stamp(),
                            }),
                            Sender::Bot => rsx!(BotMessage {
                                content: msg.text.clone(),
                                stamp: msg.stamp(),
                            }),
                        }
                    }
                    if conversation.read().is_composing() {
                        rsx!(TypingIndicator {})
                    }
                }
                div {
                    id: "input-area",
                    UserInput {
                        draft: draft,
                        clean: clean,
                        on_press: send_enter,
                    }
                    button {
                        id: "send-button",
                        onclick: send_button,
                        "Send"
                    }
                }
            }
        }
    ))
}
