use std::{collections::HashMap, time::Instant};

use client_core::{chat::UNAVAILABLE_REPLY, AgencyController};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;
use shared::domain::{DestinationId, ImageSource};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{UiError, UiEvent},
        orchestration::dispatch_backend_command,
        reducer::{reduce, UiAction},
    },
    media::PreviewImage,
    ui::{overlays, theme, views},
};

pub struct DesktopGuiApp {
    controller: AgencyController,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    chat_input: String,
    textures: HashMap<DestinationId, TextureHandle>,
    pending_images: Vec<(DestinationId, ImageSource, PreviewImage)>,
    status: String,
    status_banner: Option<UiError>,
    theme_applied: bool,
}

impl DesktopGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            controller: AgencyController::new(),
            cmd_tx,
            ui_rx,
            chat_input: String::new(),
            textures: HashMap::new(),
            pending_images: Vec::new(),
            status: "Starting...".to_string(),
            status_banner: None,
            theme_applied: false,
        }
    }

    pub fn controller(&self) -> &AgencyController {
        &self.controller
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_banner(&self) -> Option<&UiError> {
        self.status_banner.as_ref()
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    tracing::warn!(context = ?err.context(), "{}", err.message());
                    self.status = err.banner_text();
                    self.status_banner = Some(err);
                }
                UiEvent::AssistantReplied { ticket_id, reply } => {
                    if !self.controller.complete_chat(ticket_id, reply) {
                        tracing::debug!(ticket = ticket_id, "dropped stale assistant reply");
                    }
                }
                UiEvent::ImageLoaded {
                    destination,
                    source,
                    image,
                } => {
                    self.controller.image_loaded(destination, source);
                    self.pending_images.push((destination, source, image));
                }
                UiEvent::ImageFailed {
                    destination,
                    source,
                    reason,
                } => {
                    tracing::debug!(destination = %destination, ?source, "image failed: {reason}");
                    if let Some(request) = self.controller.image_failed(destination, source) {
                        self.dispatch(BackendCommand::FetchImage { request });
                    }
                }
            }
        }
    }

    /// Applies UI actions in order and forwards the backend work they imply.
    pub fn apply_actions(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            if let Some(cmd) = reduce(&mut self.controller, action) {
                self.dispatch(cmd);
            }
        }
    }

    /// Queues `cmd`. A rejected command is resolved locally as if the backend
    /// had failed it, so neither the chat nor an image slot stays pending.
    fn dispatch(&mut self, cmd: BackendCommand) {
        let mut next = Some(cmd);
        while let Some(cmd) = next.take() {
            let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd.clone()) else {
                continue;
            };
            match cmd {
                BackendCommand::AskAssistant { ticket } => {
                    self.controller.complete_chat(ticket.id, UNAVAILABLE_REPLY);
                }
                BackendCommand::FetchImage { request } => {
                    next = self
                        .controller
                        .image_failed(request.destination, request.source)
                        .map(|request| BackendCommand::FetchImage { request });
                }
            }
            self.status = err.banner_text();
            self.status_banner = Some(err);
        }
    }

    fn upload_textures(&mut self, ctx: &egui::Context) {
        for (destination, source, image) in self.pending_images.drain(..) {
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [image.width, image.height],
                &image.rgba,
            );
            let texture = ctx.load_texture(
                format!("destination-{}-{source:?}", destination.key()),
                color_image,
                egui::TextureOptions::LINEAR,
            );
            self.textures.insert(destination, texture);
        }
    }

    fn show_status_banner(&mut self, ctx: &egui::Context) {
        let Some(err) = self.status_banner() else {
            return;
        };
        let text = err.banner_text();
        let mut dismissed = false;
        egui::TopBottomPanel::bottom("status_banner")
            .frame(
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(69, 10, 10))
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(text).color(egui::Color32::from_rgb(254, 202, 202)));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            dismissed = true;
                        }
                    });
                });
            });
        if dismissed {
            self.status_banner = None;
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        self.process_ui_events();
        self.upload_textures(ctx);
        self.show_status_banner(ctx);

        let mut actions = Vec::new();
        egui::TopBottomPanel::top("nav_bar")
            .frame(
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(200))
                    .inner_margin(egui::Margin::symmetric(32, 16)),
            )
            .show(ctx, |ui| views::nav_bar(ui, &self.status, &mut actions));

        let scroll = self.controller.take_due_scroll(Instant::now());
        let input = views::ViewInput {
            controller: &self.controller,
            textures: &self.textures,
            scroll,
        };
        egui::CentralPanel::default().show(ctx, |ui| views::content(ui, &input, &mut actions));
        overlays::booking_modal(ctx, &input, &mut actions);
        overlays::service_modal(ctx, &self.controller, &mut actions);
        overlays::chat_panel(ctx, &self.controller, &mut self.chat_input, &mut actions);
        overlays::chat_toggle(ctx, &mut actions);

        self.apply_actions(actions);

        let snapshot = self.controller.snapshot();
        if snapshot.awaiting_reply || self.controller.views().has_pending_scroll() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{chat::GREETING, ImageRequest, ImageSlot, View};
    use crossbeam_channel::bounded;
    use shared::protocol::ChatRole;

    fn app() -> (DesktopGuiApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        (DesktopGuiApp::new(cmd_tx, ui_rx), cmd_rx, ui_tx)
    }

    #[test]
    fn chat_round_trip_through_the_queues() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.apply_actions(vec![UiAction::ToggleChat, UiAction::SendChat("Bonjour".into())]);

        let Ok(BackendCommand::AskAssistant { ticket }) = cmd_rx.try_recv() else {
            panic!("expected an assistant request");
        };
        assert!(app.controller().snapshot().awaiting_reply);

        ui_tx
            .send(UiEvent::AssistantReplied {
                ticket_id: ticket.id,
                reply: "Bienvenue à bord.".into(),
            })
            .expect("send reply");
        app.process_ui_events();

        let transcript = app.controller().chat().transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[0].content, GREETING);
        assert_eq!(transcript[1].role, ChatRole::User);
        assert_eq!(transcript[2].content, "Bienvenue à bord.");
        assert!(!app.controller().snapshot().awaiting_reply);
    }

    #[test]
    fn rejected_chat_request_completes_as_unavailable() {
        let (mut app, cmd_rx, _ui_tx) = app();
        drop(cmd_rx);

        app.apply_actions(vec![UiAction::SendChat("Bonjour".into())]);

        let snapshot = app.controller().snapshot();
        assert!(!snapshot.awaiting_reply);
        assert_eq!(
            app.controller().chat().transcript().last().map(|m| m.content.as_str()),
            Some(UNAVAILABLE_REPLY)
        );
        assert!(app.status_banner().is_some());
    }

    #[test]
    fn rejected_image_requests_end_in_failed_slot() {
        let (mut app, cmd_rx, _ui_tx) = app();
        drop(cmd_rx);

        app.apply_actions(vec![UiAction::NeedImage(DestinationId::Paris1889)]);

        assert_eq!(
            app.controller().images().slot(DestinationId::Paris1889),
            Some(ImageSlot::Failed)
        );
        assert!(app.status_banner().is_some());
    }

    #[test]
    fn stale_replies_are_ignored() {
        let (mut app, _cmd_rx, ui_tx) = app();
        app.apply_actions(vec![UiAction::SendChat("Bonjour".into())]);
        ui_tx
            .send(UiEvent::AssistantReplied {
                ticket_id: 999,
                reply: "trop tard".into(),
            })
            .expect("send reply");
        app.process_ui_events();

        assert!(app.controller().snapshot().awaiting_reply);
        assert_eq!(app.controller().chat().transcript().len(), 2);
    }

    #[test]
    fn failed_primary_image_requests_the_fallback_once() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.apply_actions(vec![UiAction::NeedImage(DestinationId::Paris1889)]);
        let Ok(BackendCommand::FetchImage { request }) = cmd_rx.try_recv() else {
            panic!("expected an image request");
        };
        assert_eq!(request.source, ImageSource::Primary);

        ui_tx
            .send(UiEvent::ImageFailed {
                destination: DestinationId::Paris1889,
                source: ImageSource::Primary,
                reason: "404".into(),
            })
            .expect("send failure");
        app.process_ui_events();

        let Ok(BackendCommand::FetchImage { request }) = cmd_rx.try_recv() else {
            panic!("expected the fallback request");
        };
        assert_eq!(
            request,
            ImageRequest {
                destination: DestinationId::Paris1889,
                source: ImageSource::Fallback,
                location: catalog_fallback(DestinationId::Paris1889),
            }
        );

        ui_tx
            .send(UiEvent::ImageFailed {
                destination: DestinationId::Paris1889,
                source: ImageSource::Fallback,
                reason: "offline".into(),
            })
            .expect("send failure");
        app.process_ui_events();
        assert!(cmd_rx.try_recv().is_err());
    }

    fn catalog_fallback(id: DestinationId) -> &'static str {
        shared::catalog::destination(id).fallback_image
    }

    #[test]
    fn backend_errors_surface_in_the_banner() {
        let (mut app, _cmd_rx, ui_tx) = app();
        ui_tx
            .send(UiEvent::Error(UiError::from_message(
                crate::controller::events::UiErrorContext::BackendStartup,
                "invalid Gemini endpoint `x`",
            )))
            .expect("send error");
        app.process_ui_events();
        assert!(app.status().starts_with("Backend worker startup failure"));
    }

    #[test]
    fn booking_follows_the_selected_destination() {
        let (mut app, _cmd_rx, _ui_tx) = app();
        app.apply_actions(vec![
            UiAction::OpenDestination(DestinationId::Florence1504),
            UiAction::StartBooking,
        ]);
        let snapshot = app.controller().snapshot();
        assert_eq!(snapshot.view, View::Destination(DestinationId::Florence1504));
        assert_eq!(snapshot.booking_target, Some(DestinationId::Florence1504));
    }
}
