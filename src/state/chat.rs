#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;

use crate::net::types::ChatMessage;

/// Message log and input draft for one chat page.
///
/// `messages` is append-only and kept in arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub draft: String,
}

impl ChatState {
    pub fn push(&mut self, msg: ChatMessage) {
        self.messages.push(msg);
    }

    pub fn extend(&mut self, msgs: impl IntoIterator<Item = ChatMessage>) {
        self.messages.extend(msgs);
    }

    /// Draft text if it contains anything besides whitespace.
    pub fn submittable_draft(&self) -> Option<String> {
        if self.draft.trim().is_empty() { None } else { Some(self.draft.clone()) }
    }
}

/// Drain `rx` into `sink` in arrival order until the sender side is dropped.
pub async fn forward_inbound<F>(mut rx: UnboundedReceiver<ChatMessage>, mut sink: F)
where
    F: FnMut(ChatMessage),
{
    while let Some(msg) = rx.next().await {
        sink(msg);
    }
}
