// src/render.rs
//
// Verdict → display attributes. Pure; the GUI and CLI both draw from this.

use std::fmt::Write;

use crate::api::{AnalysisResult, Prediction};

const TEXT_BAR_CELLS: usize = 20;

/// Semantic colour scheme of a verdict. The GUI owns the actual colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Affirmative,
    Negative,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub tone: Tone,
    pub headline: &'static str,
    pub label: String,
    pub confidence_percent: i64,
    /// Confidence bar width as a fraction of the track, 0.0..=1.0.
    pub bar_fraction: f32,
    pub real_percent: i64,
    pub fake_percent: i64,
}

impl ResultView {
    pub fn new(result: &AnalysisResult) -> Self {
        let (tone, headline) = match result.prediction {
            Prediction::Real => (Tone::Affirmative, "✅ Real News"),
            Prediction::Fake => (Tone::Negative, "🚫 Fake News"),
        };

        Self {
            tone,
            headline,
            label: result.prediction.label().to_uppercase(),
            confidence_percent: percent(result.confidence),
            bar_fraction: bar_fraction(result.confidence),
            real_percent: percent(result.probabilities.real),
            fake_percent: percent(result.probabilities.fake),
        }
    }

    /// Plain-text card for terminals.
    pub fn to_text(&self) -> String {
        let filled = (self.bar_fraction * TEXT_BAR_CELLS as f32).round() as usize;
        let bar = join!("#".repeat(filled), "-".repeat(TEXT_BAR_CELLS - filled));

        let mut out = s!();
        let _ = writeln!(out, "{}", self.headline);
        let _ = writeln!(out, "{}", self.label);
        let _ = writeln!(out, "Confidence Level  {}%", self.confidence_percent);
        let _ = writeln!(out, "[{bar}]");
        let _ = writeln!(
            out,
            "Real Probability  {}%    Fake Probability  {}%",
            self.real_percent, self.fake_percent
        );
        out
    }
}

/// 0.87 → 87, halves away from zero.
fn percent(p: f64) -> i64 {
    (p * 100.0).round() as i64
}

fn bar_fraction(confidence: f64) -> f32 {
    if confidence.is_nan() {
        return 0.0;
    }
    confidence.clamp(0.0, 1.0) as f32
}
