//! Booking and service dialogs plus the floating assistant panel.

use client_core::{AgencyController, BookingStage};
use eframe::egui;
use shared::{catalog, protocol::ChatRole};

use crate::{
    controller::reducer::UiAction,
    ui::{theme, views},
};

pub fn booking_modal(
    ctx: &egui::Context,
    input: &views::ViewInput<'_>,
    actions: &mut Vec<UiAction>,
) {
    let booking = input.controller.modals().booking();
    let Some(target) = booking.target() else {
        return;
    };
    if !booking.is_open() {
        return;
    }
    let destination = catalog::destination(target);

    let response = egui::Modal::new(egui::Id::new("booking_modal"))
        .frame(modal_frame())
        .show(ctx, |ui| {
            ui.set_width(760.0);
            ui.columns(2, |columns| {
                let width = columns[0].available_width();
                views::destination_image(
                    &mut columns[0],
                    input,
                    actions,
                    destination,
                    egui::vec2(width, width * 1.1),
                );

                let ui = &mut columns[1];
                ui.add_space(24.0);
                match booking.stage() {
                    BookingStage::Confirmed => {
                        ui.label(egui::RichText::new("✔").size(44.0).color(theme::SUCCESS));
                        ui.label(
                            egui::RichText::new("VOYAGE CONFIRMÉ")
                                .size(32.0)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "Votre passage vers {} a été validé. Préparez-vous pour le saut temporel.",
                                destination.title
                            ))
                            .color(theme::BODY_TEXT),
                        );
                        ui.add_space(24.0);
                        if ui
                            .add_sized([ui.available_width(), 48.0], theme::primary_button("Terminer"))
                            .clicked()
                        {
                            actions.push(UiAction::CloseBooking);
                        }
                    }
                    _ => {
                        ui.label(egui::RichText::new("🔒").size(44.0).color(theme::AMBER));
                        ui.label(
                            egui::RichText::new("AUTHENTIFICATION")
                                .size(32.0)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "Confirmez votre empreinte pour initialiser le saut vers {}.",
                                destination.title
                            ))
                            .color(theme::MUTED_TEXT),
                        );
                        ui.add_space(24.0);
                        if ui
                            .add_sized(
                                [ui.available_width(), 48.0],
                                theme::primary_button("Confirmer l'empreinte"),
                            )
                            .clicked()
                        {
                            actions.push(UiAction::ConfirmBooking);
                        }
                        ui.add_space(8.0);
                        if ui.add(theme::ghost_button("Annuler l'Expédition")).clicked() {
                            actions.push(UiAction::CloseBooking);
                        }
                    }
                }
            });
        });

    if response.should_close() {
        actions.push(UiAction::CloseBooking);
    }
}

pub fn service_modal(
    ctx: &egui::Context,
    controller: &AgencyController,
    actions: &mut Vec<UiAction>,
) {
    let Some(topic) = controller.modals().service() else {
        return;
    };
    let service = catalog::service(topic);

    let response = egui::Modal::new(egui::Id::new("service_modal"))
        .frame(modal_frame())
        .show(ctx, |ui| {
            ui.set_max_width(520.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(theme::icon_glyph(service.icon))
                        .size(44.0)
                        .color(theme::AMBER),
                );
                ui.label(
                    egui::RichText::new(service.title.to_uppercase())
                        .size(32.0)
                        .strong(),
                );
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(service.description)
                        .size(16.0)
                        .color(theme::BODY_TEXT),
                );
                ui.add_space(24.0);
                if ui
                    .add_sized([ui.available_width(), 48.0], theme::primary_button("Fermer"))
                    .clicked()
                {
                    actions.push(UiAction::CloseService);
                }
            });
        });

    if response.should_close() {
        actions.push(UiAction::CloseService);
    }
}

fn modal_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(theme::SURFACE)
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(16)))
        .corner_radius(egui::CornerRadius::same(40))
        .inner_margin(egui::Margin::same(32))
}

/// Floating toggle button in the bottom-right corner.
pub fn chat_toggle(ctx: &egui::Context, actions: &mut Vec<UiAction>) {
    egui::Area::new(egui::Id::new("chat_toggle"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-32.0, -32.0))
        .show(ctx, |ui| {
            let button = egui::Button::new(
                egui::RichText::new("💬").size(26.0).color(egui::Color32::BLACK),
            )
            .fill(theme::AMBER)
            .corner_radius(egui::CornerRadius::same(u8::MAX))
            .min_size(egui::vec2(64.0, 64.0));
            if ui.add(button).clicked() {
                actions.push(UiAction::ToggleChat);
            }
        });
}

pub fn chat_panel(
    ctx: &egui::Context,
    controller: &AgencyController,
    chat_input: &mut String,
    actions: &mut Vec<UiAction>,
) {
    if !controller.snapshot().chat_open {
        return;
    }
    let chat = controller.chat();

    egui::Window::new("assistant_panel")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-32.0, -112.0))
        .fixed_size([400.0, 550.0])
        .frame(
            egui::Frame::NONE
                .fill(egui::Color32::from_black_alpha(230))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(24)))
                .corner_radius(egui::CornerRadius::same(32))
                .inner_margin(egui::Margin::same(20)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("ASSISTANT IA")
                        .small()
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        actions.push(UiAction::CloseChat);
                    }
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("chat_transcript")
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .max_height(420.0)
                .show(ui, |ui| {
                    for message in chat.transcript() {
                        let (layout, fill, color) = match message.role {
                            ChatRole::User => (
                                egui::Layout::right_to_left(egui::Align::Min),
                                theme::AMBER,
                                egui::Color32::BLACK,
                            ),
                            ChatRole::Assistant => (
                                egui::Layout::left_to_right(egui::Align::Min),
                                egui::Color32::from_white_alpha(12),
                                theme::BODY_TEXT,
                            ),
                        };
                        ui.with_layout(layout, |ui| {
                            egui::Frame::NONE
                                .fill(fill)
                                .corner_radius(egui::CornerRadius::same(20))
                                .inner_margin(egui::Margin::symmetric(14, 10))
                                .show(ui, |ui| {
                                    ui.set_max_width(300.0);
                                    ui.label(egui::RichText::new(&message.content).color(color));
                                });
                        });
                        ui.add_space(8.0);
                    }
                    if chat.is_awaiting_reply() {
                        ui.label(
                            egui::RichText::new("Assistant réfléchit...")
                                .small()
                                .color(theme::AMBER),
                        );
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let edit = ui.add(
                    egui::TextEdit::singleline(chat_input)
                        .hint_text("Question...")
                        .desired_width(300.0),
                );
                let submitted =
                    edit.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
                let clicked = ui.add(theme::primary_button("➤")).clicked();
                if (submitted || clicked) && !chat_input.trim().is_empty() && !chat.is_awaiting_reply() {
                    actions.push(UiAction::SendChat(std::mem::take(chat_input)));
                    edit.request_focus();
                }
            });
        });
}
