//! Assistant chat transcript with single-flight sends.
//!
//! A send is split in two halves so the UI never blocks on the network:
//! [`ChatSession::begin_send`] records the user message and hands out a
//! ticket, and [`ChatSession::complete`] appends the reply for that ticket.

use async_trait::async_trait;
use shared::protocol::ChatMessage;
use tracing::{debug, warn};

use crate::error::ChatError;

pub const GREETING: &str = "Bonjour ! Comment puis-je vous aider ?";
pub const SYSTEM_INSTRUCTION: &str =
    "Tu es l'assistant de TimeTravel Agency. Réponds très brièvement (1 phrase). Réponds en français.";
/// Reply used when the model answered without any text.
pub const EMPTY_REPLY: &str = "Erreur.";
/// Reply used when the request or its decoding failed.
pub const UNAVAILABLE_REPLY: &str = "Indisponible.";

pub fn compose_prompt(text: &str) -> String {
    format!("System: {SYSTEM_INSTRUCTION}\nUser: {text}")
}

#[async_trait]
pub trait ChatCollaborator: Send + Sync {
    /// Sends one prompt. `Ok(None)` means the response carried no text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ChatError>;
}

pub struct MissingChatCollaborator;

#[async_trait]
impl ChatCollaborator for MissingChatCollaborator {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, ChatError> {
        Err(ChatError::MissingCredential)
    }
}

pub fn reply_text(outcome: Result<Option<String>, ChatError>) -> String {
    match outcome {
        Ok(Some(text)) => text,
        Ok(None) => {
            warn!("assistant response carried no candidate text");
            EMPTY_REPLY.to_string()
        }
        Err(err) => {
            warn!("assistant request failed: {err}");
            UNAVAILABLE_REPLY.to_string()
        }
    }
}

/// Runs the single outbound request for `ticket` and maps it to reply text.
pub async fn exchange(collaborator: &dyn ChatCollaborator, ticket: &ChatTicket) -> String {
    reply_text(collaborator.generate(&ticket.prompt).await)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTicket {
    pub id: u64,
    pub prompt: String,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    awaiting: Option<u64>,
    next_ticket: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(GREETING)],
            awaiting: None,
            next_ticket: 1,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting.is_some()
    }

    /// Appends the user message and marks the session in flight. Returns
    /// `None` without touching the transcript for blank text or while a
    /// previous send is still unresolved.
    pub fn begin_send(&mut self, text: &str) -> Option<ChatTicket> {
        if text.trim().is_empty() {
            return None;
        }
        if let Some(pending) = self.awaiting {
            debug!(pending, "chat send ignored while a reply is pending");
            return None;
        }

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.transcript.push(ChatMessage::user(text));
        self.awaiting = Some(id);
        Some(ChatTicket {
            id,
            prompt: compose_prompt(text),
        })
    }

    /// Appends the assistant reply for the outstanding ticket and clears the
    /// in-flight flag. Replies for any other ticket are dropped.
    pub fn complete(&mut self, ticket_id: u64, reply: impl Into<String>) -> bool {
        if self.awaiting != Some(ticket_id) {
            warn!(
                ticket_id,
                awaiting = ?self.awaiting,
                "dropping assistant reply for a ticket that is not in flight"
            );
            return false;
        }
        self.transcript.push(ChatMessage::assistant(reply));
        self.awaiting = None;
        true
    }

    /// In-process send: both halves around one awaited request.
    pub async fn send(&mut self, collaborator: &dyn ChatCollaborator, text: &str) -> bool {
        let Some(ticket) = self.begin_send(text) else {
            return false;
        };
        let reply = exchange(collaborator, &ticket).await;
        self.complete(ticket.id, reply)
    }
}
