//! Message log for one open chat dialog.
//!
//! DESIGN
//! ======
//! The log is append-only while the dialog is open and discarded when it
//! closes. Delayed replies carry the session number they were requested in,
//! so a reply whose timer fires after the dialog was closed (or closed and
//! reopened) is dropped instead of leaking into the next session.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>, timestamp: f64) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), text: text.into(), sender, timestamp }
    }
}

/// State for the chat dialog.
#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    /// Replies whose thinking delay has not elapsed yet.
    pub pending_replies: usize,
    session: u64,
}

/// Handle for a reply that will be appended later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReply {
    session: u64,
}

impl ChatSession {
    /// Start a fresh session seeded with the assistant's welcome line.
    /// No-op if already open.
    pub fn open(&mut self, welcome: &str, now: f64) {
        if self.open {
            return;
        }
        self.open = true;
        self.session += 1;
        self.messages.clear();
        self.pending_replies = 0;
        self.messages.push(ChatMessage::new(Sender::Ai, welcome, now));
        log::debug!("chat session {} opened", self.session);
    }

    /// Close and forget the conversation.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        log::debug!("chat session {} closed after {} message(s)", self.session, self.messages.len());
        self.open = false;
        self.messages.clear();
        self.pending_replies = 0;
    }

    pub fn is_thinking(&self) -> bool {
        self.pending_replies > 0
    }

    /// Whether the send button should be enabled for `input`.
    pub fn can_send(&self, input: &str, block_while_thinking: bool) -> bool {
        self.open && !input.trim().is_empty() && !(block_while_thinking && self.is_thinking())
    }

    /// Append the user's message. Blank input and a closed dialog are ignored.
    pub fn push_user(&mut self, raw: &str, now: f64) -> Option<ChatMessage> {
        let text = raw.trim();
        if !self.open || text.is_empty() {
            return None;
        }
        let message = ChatMessage::new(Sender::User, text, now);
        self.messages.push(message.clone());
        Some(message)
    }

    /// Register a reply that will arrive after the thinking delay.
    pub fn begin_reply(&mut self) -> PendingReply {
        self.pending_replies += 1;
        PendingReply { session: self.session }
    }

    /// Append a reply started with [`begin_reply`](Self::begin_reply).
    /// Returns `false` when the session it belongs to is gone.
    pub fn finish_reply(&mut self, pending: PendingReply, text: String, now: f64) -> bool {
        if !self.open || pending.session != self.session {
            log::debug!("dropping reply for closed chat session {}", pending.session);
            return false;
        }
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.messages.push(ChatMessage::new(Sender::Ai, text, now));
        true
    }
}
