//! Message log rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both chat variants render the same log. Function-call messages are
//! collapsed to the function name plus an eye glyph; their arguments and
//! content are never shown.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::net::types::ChatMessage;
use crate::util::markdown::render_markdown_html;

pub const FUNCTION_CALL_GLYPH: &str = "\u{1f441}\u{fe0f}";

/// How non-function message content is turned into markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyFormat {
    Markdown,
    Plain,
}

/// Render-ready projection of one message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageBody {
    FunctionCall { name: String },
    Markdown(String),
    Plain(String),
}

impl MessageBody {
    pub fn for_message(msg: &ChatMessage, format: BodyFormat) -> Self {
        if msg.is_function_call {
            return Self::FunctionCall { name: msg.func_name.clone().unwrap_or_default() };
        }
        match format {
            BodyFormat::Markdown => Self::Markdown(render_markdown_html(msg.content_str())),
            BodyFormat::Plain => Self::Plain(msg.content_str().to_owned()),
        }
    }
}

/// CSS class list for a message block, keyed by role.
pub fn message_class(msg: &ChatMessage) -> String {
    format!("message message--{}", msg.role.as_str())
}

/// Chat window listing every message top-to-bottom.
#[component]
pub fn MessageList(#[prop(into)] messages: Signal<Vec<ChatMessage>>, format: BodyFormat) -> impl IntoView {
    view! {
        <div class="chat-window">
            {move || {
                messages
                    .get()
                    .iter()
                    .map(|msg| {
                        let class = message_class(msg);
                        let body = match MessageBody::for_message(msg, format) {
                            MessageBody::FunctionCall { name } => {
                                view! {
                                    <span class="message__func-name">{name}</span>
                                    <span class="message__toggle-function">{FUNCTION_CALL_GLYPH}</span>
                                }
                                    .into_any()
                            }
                            MessageBody::Markdown(html) => {
                                view! { <div class="message__markdown" inner_html=html></div> }.into_any()
                            }
                            MessageBody::Plain(text) => view! { <span class="message__text">{text}</span> }.into_any(),
                        };
                        view! { <div class=class>{body}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
