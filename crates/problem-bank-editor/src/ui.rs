//! UI helper components

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 212, 170);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(145, 145, 145);

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).strong().size(14.0));
    });
    ui.separator();
}

/// Save button that stays disabled while the matching request is in flight
pub fn save_button(ui: &mut egui::Ui, in_flight: bool) -> bool {
    let label = if in_flight { "Saving…" } else { "💾 Save" };
    ui.add_enabled(!in_flight, egui::Button::new(label))
        .clicked()
}

/// Dims everything below the dialog layer
pub fn paint_backdrop(ctx: &egui::Context) {
    let layer = egui::LayerId::new(egui::Order::PanelResizeLine, egui::Id::new("dialog_backdrop"));
    ctx.layer_painter(layer)
        .rect_filled(ctx.screen_rect(), 0.0, egui::Color32::from_black_alpha(150));
}
