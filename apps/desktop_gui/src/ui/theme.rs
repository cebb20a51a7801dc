//! Dark agency palette, accent colors and icon glyphs.

use eframe::egui;
use shared::domain::{Accent, Icon};

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(5, 5, 5);
pub const SURFACE: egui::Color32 = egui::Color32::from_rgb(24, 24, 27);
pub const SURFACE_DEEP: egui::Color32 = egui::Color32::from_rgb(9, 9, 11);
pub const AMBER: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(113, 113, 122);
pub const BODY_TEXT: egui::Color32 = egui::Color32::from_rgb(212, 212, 216);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = agency_visuals();
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(16.0, 8.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);
    ctx.set_style(style);
}

fn agency_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(egui::Color32::WHITE);
    visuals.window_fill = SURFACE;
    visuals.panel_fill = BACKGROUND;
    visuals.extreme_bg_color = SURFACE_DEEP;
    visuals.faint_bg_color = egui::Color32::from_rgb(18, 18, 20);
    visuals.hyperlink_color = AMBER;
    visuals.window_corner_radius = egui::CornerRadius::same(24);
    visuals.menu_corner_radius = egui::CornerRadius::same(12);
    visuals.selection.bg_fill = AMBER.gamma_multiply(0.6);
    visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(14);
    visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(14);
    visuals.widgets.active.corner_radius = egui::CornerRadius::same(14);
    visuals.widgets.hovered.bg_fill = AMBER.gamma_multiply(0.35);
    visuals.widgets.active.bg_fill = AMBER;
    visuals
}

/// Gradient end colors for a destination card.
pub fn accent_colors(accent: Accent) -> (egui::Color32, egui::Color32) {
    let ([r0, g0, b0], [r1, g1, b1]) = accent.gradient();
    (
        egui::Color32::from_rgb(r0, g0, b0),
        egui::Color32::from_rgb(r1, g1, b1),
    )
}

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Tower => "🗼",
        Icon::Trees => "🌲",
        Icon::Palette => "🎨",
        Icon::ShieldAlert => "🛡",
        Icon::Rocket => "🚀",
        Icon::UserCheck => "👤",
    }
}

/// Filled rounded button in the highlight color.
pub fn primary_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label.to_uppercase())
            .strong()
            .color(egui::Color32::BLACK),
    )
    .fill(AMBER)
    .corner_radius(egui::CornerRadius::same(18))
}

pub fn ghost_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label.to_uppercase())
            .small()
            .strong()
            .color(MUTED_TEXT),
    )
    .frame(false)
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(SURFACE.gamma_multiply(0.6))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(12)))
        .corner_radius(egui::CornerRadius::same(28))
        .inner_margin(egui::Margin::same(20))
}

pub fn section_title(ui: &mut egui::Ui, kicker: &str, title: &str) {
    ui.label(
        egui::RichText::new(kicker.to_uppercase())
            .small()
            .strong()
            .color(AMBER),
    );
    ui.label(egui::RichText::new(title.to_uppercase()).size(40.0).strong());
    ui.add_space(24.0);
}
