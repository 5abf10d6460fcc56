use eframe::egui;

use crate::ui::MUTED;

/// Borderless edit icon. Returns true when clicked.
pub fn render_launch_button(ui: &mut egui::Ui) -> bool {
    ui.add(
        egui::Button::new(egui::RichText::new("✏").color(MUTED).size(16.0)).frame(false),
    )
    .on_hover_text("Edit problem bank")
    .clicked()
}
