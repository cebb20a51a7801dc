//! UI actions and their transitions on the agency controller.
//!
//! Views only emit [`UiAction`]s; [`reduce`] applies them and returns the
//! backend work they imply.

use std::time::Duration;

use client_core::{AgencyController, HomeSection};
use shared::domain::{DestinationId, ServiceTopic};

use crate::backend_bridge::commands::BackendCommand;

/// Delay before the nav bar scrolls to a home section, leaving the home
/// screen one frame to lay out after a view switch.
pub const NAV_SCROLL_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    GoHome,
    ReturnToStart,
    OpenDestination(DestinationId),
    GoQuiz,
    ScrollTo {
        section: HomeSection,
        delay: Duration,
    },
    ChooseQuiz(DestinationId),
    ResetQuiz,
    OpenRecommendation,
    StartBooking,
    ConfirmBooking,
    CloseBooking,
    ShowService(ServiceTopic),
    CloseService,
    ToggleChat,
    CloseChat,
    SendChat(String),
    NeedImage(DestinationId),
}

pub fn reduce(controller: &mut AgencyController, action: UiAction) -> Option<BackendCommand> {
    match action {
        UiAction::GoHome => controller.go_home(),
        UiAction::ReturnToStart => controller.return_to_start(),
        UiAction::OpenDestination(destination) => controller.open_destination(destination),
        UiAction::GoQuiz => controller.go_quiz(),
        UiAction::ScrollTo { section, delay } => controller.scroll_to_section(section, delay),
        UiAction::ChooseQuiz(destination) => controller.choose_quiz_option(destination),
        UiAction::ResetQuiz => controller.reset_quiz(),
        UiAction::OpenRecommendation => {
            controller.open_recommendation();
        }
        UiAction::StartBooking => {
            if let Err(err) = controller.start_booking() {
                tracing::debug!("ignoring booking start: {err}");
            }
        }
        UiAction::ConfirmBooking => {
            if let Err(err) = controller.confirm_booking() {
                tracing::debug!("ignoring booking confirmation: {err}");
            }
        }
        UiAction::CloseBooking => controller.close_booking(),
        UiAction::ShowService(topic) => controller.show_service(topic),
        UiAction::CloseService => controller.close_service(),
        UiAction::ToggleChat => controller.toggle_chat(),
        UiAction::CloseChat => controller.close_chat(),
        UiAction::SendChat(text) => {
            return controller
                .begin_chat_send(&text)
                .map(|ticket| BackendCommand::AskAssistant { ticket });
        }
        UiAction::NeedImage(destination) => {
            return controller
                .request_image(destination)
                .map(|request| BackendCommand::FetchImage { request });
        }
    }
    None
}
