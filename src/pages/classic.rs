//! Request/response chat page: one `POST /chat/` per question.

use leptos::prelude::*;

use crate::components::chat_input::ChatInput;
use crate::components::message_list::{BodyFormat, MessageList};
use crate::config::ClientConfig;
use crate::state::chat::ChatState;

#[component]
pub fn ClassicChatPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let chat = RwSignal::new(ChatState::default());

    let endpoint = config.post_endpoint.clone();
    let on_send = Callback::new(move |()| {
        let Some(question) = chat.with_untracked(ChatState::submittable_draft) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let endpoint = endpoint.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::post_chat(&endpoint, &question).await;
                chat.update(|c| crate::net::api::apply_post_outcome(c, outcome));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&endpoint, question);
        }
    });

    let on_input = Callback::new(move |text: String| chat.update(|c| c.draft = text));

    view! {
        <div class="chat-page chat-page--classic">
            <MessageList
                messages=Signal::derive(move || chat.with(|c| c.messages.clone()))
                format=BodyFormat::Plain
            />
            <ChatInput
                value=Signal::derive(move || chat.with(|c| c.draft.clone()))
                on_input=on_input
                on_send=on_send
            />
        </div>
    }
}
