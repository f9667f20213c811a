// src/gui/components/footer.rs
use eframe::egui::{self, RichText};

use crate::gui::theme::{GRAY_300, GRAY_400, GRAY_500, GRAY_800};

pub fn frame() -> egui::Frame {
    egui::Frame::new()
        .fill(GRAY_800)
        .inner_margin(egui::Margin::symmetric(16, 16))
}

pub fn draw(ui: &mut egui::Ui, service: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Built with Rust, egui, and Machine Learning").color(GRAY_300));
        ui.add_space(6.0);
        ui.label(
            RichText::new("🤖 AI-Powered      ⚡ Fast Detection      🎯 Accuracy tuning")
                .small()
                .color(GRAY_400),
        );
        ui.add_space(6.0);
        ui.label(
            RichText::new("© 2025 Soccer Fact-Checker. Built for research & educational purposes.")
                .small()
                .color(GRAY_500),
        );
        ui.label(RichText::new(service).small().color(GRAY_500));
    });
}
