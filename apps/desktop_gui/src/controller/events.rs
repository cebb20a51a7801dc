//! Backend-to-UI events and error modeling for the desktop controller.

use shared::domain::{DestinationId, ImageSource};

use crate::media::PreviewImage;

pub enum UiEvent {
    Info(String),
    Error(UiError),
    AssistantReplied {
        ticket_id: u64,
        reply: String,
    },
    ImageLoaded {
        destination: DestinationId,
        source: ImageSource,
        image: PreviewImage,
    },
    ImageFailed {
        destination: DestinationId,
        source: ImageSource,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Chat,
    ImageLoad,
    General,
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("queue")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text for the status banner.
    pub fn banner_text(&self) -> String {
        match self.context {
            UiErrorContext::BackendStartup => format!(
                "Backend worker startup failure; the assistant and remote images are unavailable. ({})",
                self.message
            ),
            _ => format!("{} error: {}", err_label(self.category), self.message),
        }
    }
}
