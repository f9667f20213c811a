// src/gui/components/result_card.rs
use eframe::egui::{self, Align, Layout, ProgressBar, RichText, Stroke};
use egui_extras::{Size, StripBuilder};

use crate::{
    gui::theme::{self, GRAY_600, GRAY_800, GREEN_600, RED_600},
    render::ResultView,
};

const PROB_ROW_H: f32 = 44.0;

pub fn draw(ui: &mut egui::Ui, view: &ResultView) {
    let palette = theme::palette(view.tone);

    egui::Frame::new()
        .fill(palette.fill)
        .stroke(Stroke::new(2.0, palette.border))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.vertical_centered(|ui| {
                ui.label(RichText::new(view.headline).size(24.0).strong().color(GRAY_800));
                ui.add_space(8.0);
                ui.label(RichText::new(&view.label).size(36.0).strong().color(palette.text));
            });
            ui.add_space(16.0);

            // Confidence row + bar
            ui.horizontal(|ui| {
                ui.label(RichText::new("Confidence Level").small().color(GRAY_600));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{}%", view.confidence_percent))
                            .small()
                            .color(GRAY_600),
                    );
                });
            });
            ui.add(
                ProgressBar::new(view.bar_fraction)
                    .fill(palette.bar)
                    .desired_height(12.0),
            );
            ui.add_space(16.0);

            // Real | Fake
            ui.allocate_ui(egui::vec2(ui.available_width(), PROB_ROW_H), |ui| {
                StripBuilder::new(ui)
                    .sizes(Size::remainder(), 2)
                    .horizontal(|mut strip| {
                        strip.cell(|ui| probability(ui, "Real Probability", view.real_percent, GREEN_600));
                        strip.cell(|ui| probability(ui, "Fake Probability", view.fake_percent, RED_600));
                    });
            });
        });
}

fn probability(ui: &mut egui::Ui, title: &str, percent: i64, color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).small().color(GRAY_600));
        ui.label(RichText::new(format!("{percent}%")).strong().color(color));
    });
}
