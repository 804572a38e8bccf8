#![allow(non_snake_case)]

use dioxus::prelude::*;

#[derive(PartialEq, Props)]
pub struct BubbleProps {
    content: String,
    stamp: String,
}

pub fn UserMessage(cx: Scope<BubbleProps>) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-message user-message",
            p { "{cx.props.content}" }
            span { class: "message-time", "{cx.props.stamp}" }
        }
    ))
}

pub fn BotMessage(cx: Scope<BubbleProps>) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-message other-message",
            p { "{cx.props.content}" }
            span { class: "message-time", "{cx.props.stamp}" }
        }
    ))
}

pub fn TypingIndicator(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-message other-message typing",
            span { "Assistant is typing" }
            div {
                class: "typing-dots",
                div { class: "dot" }
                div { class: "dot" }
                div { class: "dot" }
            }
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct InfoCardProps {
    title: String,
    body: String,
}

pub fn InfoCard(cx: Scope<InfoCardProps>) -> Element {
    cx.render(rsx!(
        div {
            class: "info-card",
            h3 { "{cx.props.title}" }
            // Bodies come from the static catalog only; nothing
            // user-supplied may be rendered through this path.
            div {
                class: "info-body",
                dangerous_inner_html: "{cx.props.body}",
            }
        }
    ))
}

#[derive(Props)]
pub struct DraftProps<'a> {
    draft: &'a UseRef<String>,
    clean: &'a UseState<bool>,
    on_press: EventHandler<'a, Event<KeyboardData>>,
}

pub fn UserInput<'a>(cx: Scope<'a, DraftProps<'a>>) -> Element<'a> {
    let draft = cx.props.draft;
    let clean = cx.props.clean;
    if **clean {
        clean.set(false);
        cx.render(rsx!(textarea {
            id: "user-input",
            placeholder: "Ask about campus services...",
            value: "",
            oninput: |e| {
                draft.set(e.value.clone());
            },
            onkeypress: |e| cx.props.on_press.call(e),
        }))
    } else {
        cx.render(rsx!(textarea {
            id: "user-input",
            placeholder: "Ask about campus services...",
            oninput: |e| {
                draft.set(e.value.clone());
            },
            onkeypress: |e| cx.props.on_press.call(e),
        }))
    }
}
