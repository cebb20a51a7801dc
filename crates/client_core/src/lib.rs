use std::time::{Duration, Instant};

use shared::{
    catalog,
    domain::{Destination, DestinationId, ImageSource, ServiceTopic},
    error::CatalogError,
};
use tracing::{debug, info};

pub mod chat;
pub mod error;
pub mod gemini;
pub mod images;
pub mod modal;
pub mod navigation;
pub mod quiz;

pub use chat::{ChatCollaborator, ChatSession, ChatTicket, MissingChatCollaborator};
pub use error::{BookingError, ChatError};
pub use gemini::{GeminiClient, GeminiConfig};
pub use images::{ImageRequest, ImageSlot, ImageSlots};
pub use modal::{BookingFlow, BookingStage, ModalManager};
pub use navigation::{HomeSection, ScrollTarget, View, ViewController};
pub use quiz::QuizResolver;

/// Read-only view of the controller handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgencySnapshot {
    pub view: View,
    pub selection: Option<DestinationId>,
    pub recommendation: Option<DestinationId>,
    pub booking: BookingStage,
    pub booking_target: Option<DestinationId>,
    pub service: Option<ServiceTopic>,
    pub chat_open: bool,
    pub awaiting_reply: bool,
    pub transcript_len: usize,
}

/// Owns every piece of session state and is the only place it is mutated.
#[derive(Debug, Clone, Default)]
pub struct AgencyController {
    views: ViewController,
    quiz: QuizResolver,
    modals: ModalManager,
    chat: ChatSession,
    chat_open: bool,
    images: ImageSlots,
}

impl AgencyController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> AgencySnapshot {
        let booking = self.modals.booking();
        AgencySnapshot {
            view: self.views.view(),
            selection: self.views.selection(),
            recommendation: self.quiz.recommendation(),
            booking: booking.stage(),
            booking_target: booking.target(),
            service: self.modals.service(),
            chat_open: self.chat_open,
            awaiting_reply: self.chat.is_awaiting_reply(),
            transcript_len: self.chat.transcript().len(),
        }
    }

    pub fn views(&self) -> &ViewController {
        &self.views
    }

    pub fn quiz(&self) -> &QuizResolver {
        &self.quiz
    }

    pub fn modals(&self) -> &ModalManager {
        &self.modals
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn images(&self) -> &ImageSlots {
        &self.images
    }

    pub fn selected_destination(&self) -> Option<&'static Destination> {
        self.views.selection().map(catalog::destination)
    }

    // Navigation

    pub fn go_home(&mut self) {
        self.views.go_home();
        self.modals.clear_confirmation();
    }

    pub fn open_destination(&mut self, destination: DestinationId) {
        info!(destination = %destination, "showing destination");
        self.views.open(destination);
        self.modals.clear_confirmation();
    }

    pub fn go_quiz(&mut self) {
        self.views.go_quiz();
    }

    pub fn scroll_to_section(&mut self, section: HomeSection, delay: Duration) {
        debug!(section = section.anchor(), ?delay, "scroll requested");
        self.views.scroll_to_section(section, delay);
    }

    pub fn take_due_scroll(&mut self, now: Instant) -> Option<ScrollTarget> {
        self.views.take_due_scroll(now)
    }

    /// Brand click: back home with the quiz cleared.
    pub fn return_to_start(&mut self) {
        self.go_home();
        self.quiz.reset();
    }

    // Quiz

    pub fn choose_quiz_option(&mut self, value: DestinationId) {
        debug!(recommendation = %value, "quiz answered");
        self.quiz.choose(value);
    }

    pub fn choose_quiz_key(&mut self, key: &str) -> Result<DestinationId, CatalogError> {
        self.quiz.choose_key(key)
    }

    pub fn reset_quiz(&mut self) {
        self.quiz.reset();
    }

    /// Opens the recommended destination. Returns `false` while unanswered.
    pub fn open_recommendation(&mut self) -> bool {
        match self.quiz.resolve() {
            Some(destination) => {
                self.open_destination(destination.id);
                true
            }
            None => false,
        }
    }

    // Overlays

    pub fn start_booking(&mut self) -> Result<DestinationId, BookingError> {
        self.modals.start_booking(self.views.selection())
    }

    pub fn confirm_booking(&mut self) -> Result<(), BookingError> {
        self.modals.confirm()
    }

    pub fn close_booking(&mut self) {
        self.modals.close();
    }

    pub fn show_service(&mut self, topic: ServiceTopic) {
        self.modals.show_service(topic);
    }

    pub fn show_service_key(&mut self, key: &str) -> Result<ServiceTopic, CatalogError> {
        let topic = key.parse::<ServiceTopic>()?;
        self.show_service(topic);
        Ok(topic)
    }

    pub fn close_service(&mut self) {
        self.modals.close_service();
    }

    // Chat

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }

    pub fn begin_chat_send(&mut self, text: &str) -> Option<ChatTicket> {
        self.chat.begin_send(text)
    }

    pub fn complete_chat(&mut self, ticket_id: u64, reply: impl Into<String>) -> bool {
        self.chat.complete(ticket_id, reply)
    }

    pub async fn send_chat(&mut self, collaborator: &dyn ChatCollaborator, text: &str) -> bool {
        self.chat.send(collaborator, text).await
    }

    // Images

    pub fn request_image(&mut self, destination: DestinationId) -> Option<ImageRequest> {
        self.images.request(destination)
    }

    pub fn image_loaded(&mut self, destination: DestinationId, source: ImageSource) {
        self.images.loaded(destination, source);
    }

    pub fn image_failed(
        &mut self,
        destination: DestinationId,
        source: ImageSource,
    ) -> Option<ImageRequest> {
        self.images.failed(destination, source)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/gemini_tests.rs"]
mod gemini_tests;
