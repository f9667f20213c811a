// src/gui/components/news_form.rs
//
// The form card: text box, counter, Analyze/Clear, then banner or verdict.
// Buttons only record intent; the controller is driven after the layout
// closures release their borrows.

use eframe::egui::{self, Button, RichText, TextEdit, widgets::Spinner};

use crate::{
    config::consts::MAX_TEXT_CHARS,
    form::{FormController, SubmitOutcome},
    gui::theme::{GRAY_500, GRAY_600},
    render::ResultView,
};

use super::{banner, result_card};

const PLACEHOLDER: &str = "Enter soccer news text here... \
    (e.g., 'Lionel Messi signs new contract with PSG for €50 million per year')";

pub fn draw(ui: &mut egui::Ui, form: &mut FormController) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Analyze Soccer News").strong());
            });
            ui.add_space(12.0);

            let loading = form.is_loading();

            ui.label(RichText::new("Paste your soccer news article here:").color(GRAY_600));
            ui.add(
                TextEdit::multiline(form.text_mut())
                    .desired_rows(8)
                    .desired_width(f32::INFINITY)
                    .hint_text(PLACEHOLDER)
                    .interactive(!loading),
            );
            ui.label(
                RichText::new(format!("{}/{} characters", form.char_count(), MAX_TEXT_CHARS))
                    .small()
                    .color(GRAY_500),
            );
            ui.add_space(8.0);

            let mut submit = ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));
            let mut clear = false;

            ui.horizontal(|ui| {
                let label = if loading { "Analyzing..." } else { "🔍 Analyze News" };
                if ui.add_enabled(form.can_submit(), Button::new(label)).clicked() {
                    submit = true;
                }
                if loading {
                    ui.add(Spinner::new().size(16.0));
                }
                if !form.text().is_empty()
                    && ui.add_enabled(form.can_clear(), Button::new("Clear")).clicked()
                {
                    clear = true;
                }
            });

            if submit && form.can_submit() {
                match form.submit() {
                    SubmitOutcome::Sent => logf!("UI: Analyze clicked ({} chars)", form.char_count()),
                    other => logd!("UI: Analyze → {:?}", other),
                }
            }
            if clear {
                form.clear();
                logd!("UI: Clear");
            }

            if let Some(message) = form.error() {
                ui.add_space(16.0);
                banner::draw(ui, message);
            }

            if let Some(result) = form.result() {
                ui.add_space(16.0);
                result_card::draw(ui, &ResultView::new(result));
            }
        });
}
