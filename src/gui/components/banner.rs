// src/gui/components/banner.rs
use eframe::egui::{self, RichText, Stroke};

use crate::gui::theme::{RED_50, RED_200, RED_700};

/// Error banner under the form.
pub fn draw(ui: &mut egui::Ui, message: &str) {
    egui::Frame::new()
        .fill(RED_50)
        .stroke(Stroke::new(1.0, RED_200))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("⚠️ {message}")).color(RED_700));
        });
}
