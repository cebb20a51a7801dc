//! Screen renderers. Each function draws from controller state and records
//! [`UiAction`]s; nothing here mutates the controller.

use std::collections::HashMap;

use client_core::{AgencyController, HomeSection, ImageSlot, ScrollTarget, View};
use eframe::egui;
use shared::{
    catalog,
    domain::{Destination, DestinationId},
};

use crate::{
    controller::reducer::{UiAction, NAV_SCROLL_DELAY},
    ui::theme,
};

pub struct ViewInput<'a> {
    pub controller: &'a AgencyController,
    pub textures: &'a HashMap<DestinationId, egui::TextureHandle>,
    /// Scroll target that became due this frame, if any.
    pub scroll: Option<ScrollTarget>,
}

impl ViewInput<'_> {
    fn scroll_here(&self, target: ScrollTarget, response: &egui::Response) {
        if self.scroll == Some(target) {
            response.scroll_to_me(Some(egui::Align::TOP));
        }
    }
}

pub fn nav_bar(ui: &mut egui::Ui, status: &str, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        let brand = ui.add(
            egui::Label::new(
                egui::RichText::new("🕐 TIMETRAVEL")
                    .size(22.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .sense(egui::Sense::click()),
        );
        if brand.clicked() {
            actions.push(UiAction::ReturnToStart);
        }

        ui.add_space(32.0);
        if ui.add(theme::ghost_button("Univers")).clicked() {
            actions.push(UiAction::GoHome);
        }
        if ui.add(theme::ghost_button("Expéditions")).clicked() {
            actions.push(UiAction::ScrollTo {
                section: HomeSection::Destinations,
                delay: NAV_SCROLL_DELAY,
            });
        }
        if ui.add(theme::ghost_button("Expertise IA")).clicked() {
            actions.push(UiAction::GoQuiz);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(theme::primary_button("Démarrer")).clicked() {
                actions.push(UiAction::GoQuiz);
            }
            ui.label(egui::RichText::new(status).small().color(theme::MUTED_TEXT));
        });
    });
}

/// Main scrollable content: the current screen followed by the footer.
pub fn content(ui: &mut egui::Ui, input: &ViewInput<'_>, actions: &mut Vec<UiAction>) {
    let view = input.controller.views().view();
    egui::ScrollArea::vertical()
        .id_salt(("content", view_salt(view)))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let top = ui.allocate_response(egui::vec2(0.0, 0.0), egui::Sense::hover());
            input.scroll_here(ScrollTarget::Top, &top);

            match view {
                View::Home => home(ui, input, actions),
                View::Destination(id) => destination_detail(ui, input, actions, id),
                View::Quiz => quiz(ui, input, actions),
            }
            footer(ui, actions);
        });
}

fn view_salt(view: View) -> &'static str {
    match view {
        View::Home => "home",
        View::Destination(_) => "destination",
        View::Quiz => "quiz",
    }
}

fn home(ui: &mut egui::Ui, input: &ViewInput<'_>, actions: &mut Vec<UiAction>) {
    // Hero
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(
            egui::RichText::new("LE TEMPS EST UNE ILLUSION")
                .small()
                .strong()
                .color(theme::AMBER),
        );
        ui.add_space(24.0);
        ui.label(egui::RichText::new("L'HISTOIRE").size(72.0).strong());
        ui.label(
            egui::RichText::new("RÉINVENTÉE")
                .size(72.0)
                .strong()
                .color(theme::AMBER),
        );
        ui.add_space(32.0);
        ui.horizontal(|ui| {
            let buttons_width = 360.0;
            ui.add_space(((ui.available_width() - buttons_width) / 2.0).max(0.0));
            if ui.add(theme::ghost_button("Explorer")).clicked() {
                actions.push(UiAction::ScrollTo {
                    section: HomeSection::Destinations,
                    delay: std::time::Duration::ZERO,
                });
            }
            ui.add_space(24.0);
            if ui.add(theme::primary_button("Profil Temporel ›")).clicked() {
                actions.push(UiAction::GoQuiz);
            }
        });
        ui.add_space(120.0);
    });

    // Destinations gallery
    let anchor = ui.allocate_response(egui::vec2(0.0, 0.0), egui::Sense::hover());
    input.scroll_here(ScrollTarget::Section(HomeSection::Destinations), &anchor);
    theme::section_title(ui, "03 Expéditions Exclusives", "Horizons Temporels");
    let card_width = ((ui.available_width() - 48.0) / 3.0).max(220.0);
    ui.horizontal_wrapped(|ui| {
        for destination in catalog::destinations() {
            destination_card(ui, input, actions, destination, card_width);
        }
    });
    ui.add_space(96.0);

    heritage(ui);
}

fn destination_card(
    ui: &mut egui::Ui,
    input: &ViewInput<'_>,
    actions: &mut Vec<UiAction>,
    destination: &'static Destination,
    width: f32,
) {
    let frame = theme::card_frame().show(ui, |ui| {
        ui.set_width(width - 40.0);
        destination_image(
            ui,
            input,
            actions,
            destination,
            egui::vec2(width - 40.0, (width - 40.0) * 1.2),
        );
        ui.add_space(12.0);
        let (from, to) = theme::accent_colors(destination.accent);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(theme::icon_glyph(destination.icon))
                    .size(22.0)
                    .color(from),
            );
            ui.label(
                egui::RichText::new(destination.subtitle.to_uppercase())
                    .small()
                    .strong()
                    .color(to),
            );
        });
        ui.label(
            egui::RichText::new(destination.title.to_uppercase())
                .size(30.0)
                .strong(),
        );
        ui.label(egui::RichText::new(destination.description).color(theme::BODY_TEXT));
    });

    let response = ui
        .interact(
            frame.response.rect,
            ui.id().with(("destination_card", destination.id.key())),
            egui::Sense::click(),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.clicked() {
        actions.push(UiAction::OpenDestination(destination.id));
    }
}

fn heritage(ui: &mut egui::Ui) {
    egui::Frame::NONE
        .fill(theme::SURFACE_DEEP)
        .inner_margin(egui::Margin::symmetric(32, 48))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.columns(2, |columns| {
                theme::section_title(&mut columns[0], "Sécurité Alpha", "Un Héritage d'Excellence");
                columns[0].label(
                    egui::RichText::new(
                        "Depuis plus de deux décennies, TimeTravel Agency définit les standards du voyage chronologique de luxe. Nos protocoles de sécurité garantissent une protection absolue contre les altérations historiques.",
                    )
                    .size(18.0)
                    .color(theme::MUTED_TEXT),
                );
                columns[0].add_space(24.0);
                columns[0].horizontal(|ui| {
                    stat(ui, "12k+", "Sauts Réussis");
                    ui.add_space(48.0);
                    stat(ui, "0.0%", "Incident Temporel");
                });

                theme::card_frame().show(&mut columns[1], |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(24.0);
                        ui.label(egui::RichText::new("📈").size(56.0).color(theme::AMBER));
                        ui.label(
                            egui::RichText::new("MONITORING CHRONAL")
                                .size(26.0)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(
                                "Chaque seconde de votre séjour est surveillée par notre IA centrale pour prévenir toute déviation historique.",
                            )
                            .color(theme::MUTED_TEXT),
                        );
                        ui.add_space(24.0);
                    });
                });
            });
        });
}

fn stat(ui: &mut egui::Ui, value: &str, label: &str) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(value)
                .size(44.0)
                .strong()
                .color(theme::AMBER),
        );
        ui.label(
            egui::RichText::new(label.to_uppercase())
                .small()
                .strong()
                .color(theme::MUTED_TEXT),
        );
    });
}

fn destination_detail(
    ui: &mut egui::Ui,
    input: &ViewInput<'_>,
    actions: &mut Vec<UiAction>,
    id: DestinationId,
) {
    let destination = catalog::destination(id);
    ui.add_space(32.0);
    if ui.add(theme::ghost_button("‹ Retour")).clicked() {
        actions.push(UiAction::GoHome);
    }
    ui.add_space(32.0);

    ui.columns(2, |columns| {
        let image_width = columns[0].available_width();
        destination_image(
            &mut columns[0],
            input,
            actions,
            destination,
            egui::vec2(image_width, image_width * 4.0 / 3.0),
        );
        theme::card_frame().show(&mut columns[0], |ui| {
            ui.label(
                egui::RichText::new("TARIF DE L'EXPÉDITION")
                    .small()
                    .strong()
                    .color(theme::MUTED_TEXT),
            );
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(destination.price)
                        .size(44.0)
                        .strong()
                        .color(theme::AMBER),
                );
                ui.label(
                    egui::RichText::new(format!("· {}", destination.duration))
                        .size(18.0)
                        .color(theme::MUTED_TEXT),
                );
            });
        });

        let ui = &mut columns[1];
        ui.label(
            egui::RichText::new(destination.title.to_uppercase())
                .size(64.0)
                .strong(),
        );
        ui.label(
            egui::RichText::new(destination.subtitle.to_uppercase())
                .size(24.0)
                .italics()
                .color(theme::AMBER),
        );
        ui.add_space(24.0);
        ui.label(
            egui::RichText::new(destination.long_description)
                .size(18.0)
                .color(theme::BODY_TEXT),
        );
        ui.add_space(32.0);
        ui.label(
            egui::RichText::new("ARCHIVES DIGITALES")
                .small()
                .strong()
                .color(theme::AMBER),
        );
        for detail in destination.historical_details {
            theme::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("✔").color(theme::AMBER));
                    ui.label(egui::RichText::new(*detail).color(theme::BODY_TEXT));
                });
            });
        }
        ui.add_space(32.0);
        if ui
            .add_sized(
                [ui.available_width(), 56.0],
                theme::primary_button("Réclamer mon Passage"),
            )
            .clicked()
        {
            actions.push(UiAction::StartBooking);
        }
    });
}

fn quiz(ui: &mut egui::Ui, input: &ViewInput<'_>, actions: &mut Vec<UiAction>) {
    ui.add_space(80.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(720.0);
        match input.controller.quiz().resolve() {
            Some(destination) => {
                theme::card_frame().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("✔").size(48.0).color(theme::AMBER));
                        ui.label(
                            egui::RichText::new("RÉSONANCE ÉTABLIE")
                                .size(48.0)
                                .strong(),
                        );
                        ui.add_space(24.0);
                        destination_image(ui, input, actions, destination, egui::vec2(224.0, 224.0));
                        ui.label(
                            egui::RichText::new(destination.title.to_uppercase())
                                .size(36.0)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(destination.subtitle.to_uppercase())
                                .small()
                                .strong()
                                .color(theme::AMBER),
                        );
                        ui.add_space(16.0);
                        if ui.add(theme::primary_button("Accéder à l'Histoire")).clicked() {
                            actions.push(UiAction::OpenRecommendation);
                        }
                        ui.add_space(16.0);
                        if ui.add(theme::ghost_button("Recommencer")).clicked() {
                            actions.push(UiAction::ResetQuiz);
                        }
                    });
                });
            }
            None => {
                theme::card_frame().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("PROFIL VOYAGEUR")
                                .size(36.0)
                                .strong()
                                .color(theme::AMBER),
                        );
                    });
                    ui.add_space(24.0);
                    for option in &catalog::QUIZ_OPTIONS {
                        let button = egui::Button::new(
                            egui::RichText::new(format!("{}  ›", option.label)).strong(),
                        )
                        .fill(egui::Color32::from_white_alpha(8))
                        .corner_radius(egui::CornerRadius::same(16));
                        if ui.add_sized([ui.available_width(), 56.0], button).clicked() {
                            actions.push(UiAction::ChooseQuiz(option.recommends));
                        }
                    }
                });
            }
        }
    });
    ui.add_space(80.0);
}

fn footer(ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    ui.add_space(96.0);
    egui::Frame::NONE
        .fill(theme::SURFACE_DEEP)
        .inner_margin(egui::Margin::symmetric(32, 64))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.columns(4, |columns| {
                columns[0].label(egui::RichText::new("🕐 TIMETRAVEL").size(26.0).strong());
                columns[0].label(
                    egui::RichText::new("Redéfinir le futur en explorant le passé.")
                        .color(theme::MUTED_TEXT),
                );

                footer_heading(&mut columns[1], "Expéditions");
                for destination in catalog::destinations() {
                    if footer_link(&mut columns[1], destination.title).clicked() {
                        actions.push(UiAction::OpenDestination(destination.id));
                    }
                }

                footer_heading(&mut columns[2], "Expertise");
                for service in catalog::services() {
                    let label = format!("{} {}", theme::icon_glyph(service.icon), service.title);
                    if footer_link(&mut columns[2], &label).clicked() {
                        actions.push(UiAction::ShowService(service.topic));
                    }
                }

                footer_heading(&mut columns[3], "Contact");
                columns[3].label(
                    egui::RichText::new("SECTEUR ALPHA-1\n75007 PARIS, PRÉSENT")
                        .small()
                        .strong()
                        .color(theme::MUTED_TEXT),
                );
                columns[3].add_space(12.0);
                columns[3].label(
                    egui::RichText::new("SUPPORT TEMPOREL 24/7")
                        .small()
                        .color(egui::Color32::from_gray(60)),
                );
            });
        });
}

fn footer_heading(ui: &mut egui::Ui, title: &str) {
    ui.label(
        egui::RichText::new(title.to_uppercase())
            .small()
            .strong()
            .color(theme::AMBER),
    );
    ui.add_space(12.0);
}

fn footer_link(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Label::new(
            egui::RichText::new(format!("› {}", text.to_uppercase()))
                .small()
                .strong()
                .color(theme::MUTED_TEXT),
        )
        .sense(egui::Sense::click()),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Draws a destination's artwork, asking for it on first sight. While the
/// texture is missing the slot shows its accent color and icon.
pub fn destination_image(
    ui: &mut egui::Ui,
    input: &ViewInput<'_>,
    actions: &mut Vec<UiAction>,
    destination: &'static Destination,
    size: egui::Vec2,
) {
    if let Some(texture) = input.textures.get(&destination.id) {
        ui.add(
            egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                .fit_to_exact_size(size)
                .corner_radius(egui::CornerRadius::same(24)),
        );
        return;
    }

    let slot = input.controller.images().slot(destination.id);
    if slot.is_none() && !actions.contains(&UiAction::NeedImage(destination.id)) {
        actions.push(UiAction::NeedImage(destination.id));
    }

    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let (from, to) = theme::accent_colors(destination.accent);
    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::same(24), to.gamma_multiply(0.25));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        theme::icon_glyph(destination.icon),
        egui::FontId::proportional(48.0),
        from,
    );
    if matches!(slot, None | Some(ImageSlot::Loading(_))) {
        let spinner_rect =
            egui::Rect::from_center_size(rect.center() + egui::vec2(0.0, 48.0), egui::vec2(20.0, 20.0));
        ui.put(spinner_rect, egui::Spinner::new().color(theme::AMBER));
    }
}
