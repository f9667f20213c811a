// src/gui/components/header.rs
use eframe::egui::{self, RichText};

use crate::gui::theme::{BLUE_100, BLUE_600};

pub fn frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BLUE_600)
        .inner_margin(egui::Margin::symmetric(16, 24))
}

pub fn draw(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("⚽ Soccer News Fact-Checker")
                .size(32.0)
                .strong()
                .color(egui::Color32::WHITE),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new("AI-powered detection of fake soccer news")
                .size(16.0)
                .color(BLUE_100),
        );
    });
}
