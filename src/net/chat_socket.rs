//! Streaming chat transport over a single WebSocket.
//!
//! `ChatSocket` is the explicitly owned connection handle. Outgoing payloads
//! are queued on a channel and pumped to the socket by a local task; incoming
//! text frames are decoded and pushed onto the caller's inbound channel in
//! delivery order.
//!
//! Lifecycle: `Connecting` -> `Open` -> `Closed`. There is no reconnection;
//! once closed, the handle stays closed for the rest of the page session.
//!
//! All WebSocket I/O is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "chat_socket_test.rs"]
mod chat_socket_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::types::{ChatMessage, StreamRequest};
use crate::error::ChatError;
use crate::state::chat::ChatState;

/// Connection lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Open,
    Closed,
}

/// Command consumed by the socket writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outbound {
    Text(String),
    Close,
}

/// Owned handle to the streaming connection.
#[derive(Clone, Debug)]
pub struct ChatSocket {
    state: Arc<Mutex<ConnectionState>>,
    outbound: UnboundedSender<Outbound>,
}

/// Driver side of a `ChatSocket`: receives outbound commands and reports state.
#[derive(Debug)]
pub struct SocketLink {
    pub state: Arc<Mutex<ConnectionState>>,
    pub outbound: UnboundedReceiver<Outbound>,
}

impl SocketLink {
    pub fn set_state(&self, next: ConnectionState) {
        set_state(&self.state, next);
    }
}

impl ChatSocket {
    /// A handle in the `Connecting` state with no network behind it.
    pub fn detached() -> (Self, SocketLink) {
        let state = Arc::new(Mutex::new(ConnectionState::Connecting));
        let (tx, rx) = mpsc::unbounded();
        let socket = Self { state: Arc::clone(&state), outbound: tx };
        (socket, SocketLink { state, outbound: rx })
    }

    /// Open a WebSocket to `url` and start the I/O task.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Transport` if the browser rejects the URL.
    #[cfg(feature = "csr")]
    pub fn connect(url: &str, inbound: UnboundedSender<ChatMessage>) -> Result<Self, ChatError> {
        use gloo_net::websocket::futures::WebSocket;

        let ws = WebSocket::open(url).map_err(|e| ChatError::Transport(e.to_string()))?;
        let (socket, link) = Self::detached();
        leptos::task::spawn_local(run_connection(ws, link, inbound));
        Ok(socket)
    }

    pub fn state(&self) -> ConnectionState {
        *lock(&self.state)
    }

    /// Send one question tagged with `session_id`.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::NotConnected` without transmitting anything when
    /// the connection is not open.
    pub fn send(&self, question: &str, session_id: &str) -> Result<(), ChatError> {
        if self.state() != ConnectionState::Open {
            leptos::logging::error!("WebSocket is not open. Can't send message.");
            return Err(ChatError::NotConnected);
        }
        let payload = encode_request(question, session_id)?;
        self.outbound
            .unbounded_send(Outbound::Text(payload))
            .map_err(|_| ChatError::NotConnected)
    }

    /// Send the draft of `state` as the next question.
    ///
    /// Blank drafts are skipped without reading the session id or touching
    /// the connection. `state` is borrowed immutably: the streaming page
    /// keeps the draft as typed and the log only grows from inbound frames.
    /// Returns whether a question was queued.
    ///
    /// # Errors
    ///
    /// Same as [`ChatSocket::send`].
    pub fn submit_draft(
        &self,
        state: &ChatState,
        session_id: impl FnOnce() -> String,
    ) -> Result<bool, ChatError> {
        let Some(question) = state.submittable_draft() else {
            return Ok(false);
        };
        self.send(&question, &session_id())?;
        Ok(true)
    }

    /// Close the connection if it is open. Returns whether a close was issued.
    pub fn close(&self) -> bool {
        {
            let mut state = lock(&self.state);
            if *state != ConnectionState::Open {
                return false;
            }
            *state = ConnectionState::Closed;
        }
        let _ = self.outbound.unbounded_send(Outbound::Close);
        true
    }
}

/// Serialize the outbound socket payload.
///
/// # Errors
///
/// Returns `ChatError::Decode` if serialization fails.
pub fn encode_request(question: &str, session_id: &str) -> Result<String, ChatError> {
    let req = StreamRequest { question: question.to_owned(), session_id: session_id.to_owned() };
    Ok(serde_json::to_string(&req)?)
}

/// Decode one inbound text frame into a message.
///
/// # Errors
///
/// Returns `ChatError::Decode` for malformed or role-less payloads.
pub fn decode_inbound(text: &str) -> Result<ChatMessage, ChatError> {
    Ok(serde_json::from_str(text)?)
}

fn lock(state: &Mutex<ConnectionState>) -> MutexGuard<'_, ConnectionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn set_state(state: &Mutex<ConnectionState>, next: ConnectionState) {
    *lock(state) = next;
}

/// Connection state once one handshake poll has resolved, or `None` while
/// it is still pending.
///
/// A sink that reports ready only counts as open when the socket itself says
/// so; a failed handshake also leaves `CONNECTING` and wakes the sink.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn handshake_outcome(
    stream_ended: bool,
    sink_ready: Option<bool>,
    socket_open: bool,
) -> Option<ConnectionState> {
    if stream_ended {
        return Some(ConnectionState::Closed);
    }
    let ready = sink_ready?;
    Some(if ready && socket_open { ConnectionState::Open } else { ConnectionState::Closed })
}

/// Wait for the handshake, then pump outbound commands and inbound frames
/// until either side ends.
#[cfg(feature = "csr")]
async fn run_connection(
    mut ws: gloo_net::websocket::futures::WebSocket,
    link: SocketLink,
    inbound: UnboundedSender<ChatMessage>,
) {
    use std::task::Poll;

    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::{Message, State};

    let SocketLink { state, mut outbound } = link;

    // Nothing can arrive before the socket opens, so any stream item here is
    // the error or close of a failed handshake.
    let handshake = futures::future::poll_fn(|cx| {
        let stream_ended = matches!(ws.poll_next_unpin(cx), Poll::Ready(None | Some(Err(_))));
        let sink_ready = match ws.poll_ready_unpin(cx) {
            Poll::Ready(r) => Some(r.is_ok()),
            Poll::Pending => None,
        };
        match handshake_outcome(stream_ended, sink_ready, matches!(ws.state(), State::Open)) {
            Some(next) => Poll::Ready(next),
            None => Poll::Pending,
        }
    })
    .await;

    if handshake != ConnectionState::Open {
        set_state(&state, ConnectionState::Closed);
        leptos::logging::warn!("ws handshake failed");
        leptos::logging::log!("ws closed");
        return;
    }
    set_state(&state, ConnectionState::Open);
    leptos::logging::log!("ws opened");

    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        while let Some(cmd) = outbound.next().await {
            match cmd {
                Outbound::Text(json) => {
                    if ws_write.send(Message::Text(json)).await.is_err() {
                        break;
                    }
                }
                Outbound::Close => {
                    let _ = ws_write.close().await;
                    break;
                }
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match decode_inbound(&text) {
                    Ok(message) => {
                        if inbound.unbounded_send(message).is_err() {
                            break;
                        }
                    }
                    Err(e) => leptos::logging::error!("ws inbound: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("ws recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    set_state(&state, ConnectionState::Closed);
    // TODO: reconnect with backoff once the backend can resume a session mid-turn.
    leptos::logging::log!("ws closed");
}
