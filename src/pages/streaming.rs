//! Streaming chat page over a persistent WebSocket.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `ChatSocket` for its lifetime. Inbound messages arrive
//! on a channel that the message log drains in delivery order. The socket is
//! closed on unmount only if it is still open; a dropped connection is not
//! re-established.

use futures::channel::mpsc::{self, UnboundedSender};
use leptos::prelude::*;

use crate::components::chat_input::ChatInput;
use crate::components::message_list::{BodyFormat, MessageList};
use crate::config::ClientConfig;
use crate::net::chat_socket::{ChatSocket, ConnectionState};
use crate::net::types::ChatMessage;
use crate::state::chat::ChatState;
use crate::state::session::get_or_create_session_id;

#[component]
pub fn StreamingChatPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let chat = RwSignal::new(ChatState::default());

    let (inbound_tx, inbound_rx) = mpsc::unbounded::<ChatMessage>();
    let socket = open_socket(&config, inbound_tx);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(crate::state::chat::forward_inbound(inbound_rx, move |msg| {
        chat.update(|c| c.push(msg));
    }));
    #[cfg(not(feature = "csr"))]
    drop(inbound_rx);

    on_cleanup({
        let socket = socket.clone();
        move || {
            socket.close();
        }
    });

    let session_key = config.session_key.clone();
    let on_send = Callback::new(move |()| {
        // Failure is already reported to the console; the draft stays as typed.
        let _ = chat.with_untracked(|c| socket.submit_draft(c, || local_session_id(&session_key)));
    });

    let on_input = Callback::new(move |text: String| chat.update(|c| c.draft = text));

    view! {
        <div class="chat-page chat-page--streaming">
            <MessageList
                messages=Signal::derive(move || chat.with(|c| c.messages.clone()))
                format=BodyFormat::Markdown
            />
            <ChatInput
                value=Signal::derive(move || chat.with(|c| c.draft.clone()))
                on_input=on_input
                on_send=on_send
            />
        </div>
    }
}

fn local_session_id(key: &str) -> String {
    #[cfg(feature = "csr")]
    {
        get_or_create_session_id(&crate::state::session::BrowserStorage, key)
    }
    #[cfg(not(feature = "csr"))]
    {
        get_or_create_session_id(&crate::state::session::MemoryStore::default(), key)
    }
}

/// Connect to the page origin's chat socket, or hand back a closed handle.
fn open_socket(config: &ClientConfig, inbound: UnboundedSender<ChatMessage>) -> ChatSocket {
    #[cfg(feature = "csr")]
    {
        let location = web_sys::window().map(|w| w.location());
        let protocol = location
            .as_ref()
            .and_then(|l| l.protocol().ok())
            .unwrap_or_default();
        let host = location
            .as_ref()
            .and_then(|l| l.host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let url = config.websocket_url(&protocol, &host);
        match ChatSocket::connect(&url, inbound) {
            Ok(socket) => return socket,
            Err(e) => leptos::logging::error!("ws connect failed: {e}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = (config, inbound);

    let (socket, link) = ChatSocket::detached();
    link.set_state(ConnectionState::Closed);
    socket
}
