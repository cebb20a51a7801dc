//! Backend commands queued from UI to backend worker.

use client_core::{ChatTicket, ImageRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    AskAssistant { ticket: ChatTicket },
    FetchImage { request: ImageRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::AskAssistant { .. } => "ask_assistant",
            BackendCommand::FetchImage { .. } => "fetch_image",
        }
    }
}
