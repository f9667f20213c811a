// tests/result_view.rs
use soccer_factcheck::api::{AnalysisResult, Prediction, Probabilities};
use soccer_factcheck::render::{ResultView, Tone};

fn result(prediction: Prediction, confidence: f64, real: f64, fake: f64) -> AnalysisResult {
    AnalysisResult { prediction, confidence, probabilities: Probabilities { real, fake } }
}

#[test]
fn real_verdict_uses_affirmative_scheme() {
    let view = ResultView::new(&result(Prediction::Real, 0.87, 0.87, 0.13));

    assert_eq!(view.tone, Tone::Affirmative);
    assert_eq!(view.headline, "✅ Real News");
    assert_eq!(view.label, "REAL");
    assert_eq!(view.confidence_percent, 87);
    assert!((view.bar_fraction - 0.87).abs() < 1e-6);
    assert_eq!(view.real_percent, 87);
    assert_eq!(view.fake_percent, 13);
}

#[test]
fn fake_verdict_uses_negative_scheme() {
    let view = ResultView::new(&result(Prediction::Fake, 0.64, 0.36, 0.64));

    assert_eq!(view.tone, Tone::Negative);
    assert_eq!(view.headline, "🚫 Fake News");
    assert_eq!(view.label, "FAKE");
    assert_eq!(view.confidence_percent, 64);
    assert_eq!(view.real_percent, 36);
    assert_eq!(view.fake_percent, 64);
}

#[test]
fn probabilities_are_rounded_independently() {
    // Each side is rounded on its own; no normalisation against the other.
    let view = ResultView::new(&result(Prediction::Fake, 0.5049, 0.4951, 0.5049));
    assert_eq!(view.confidence_percent, 50);
    assert_eq!(view.real_percent, 50);
    assert_eq!(view.fake_percent, 50);
}

#[test]
fn bar_stays_on_the_track_for_odd_confidence() {
    let high = ResultView::new(&result(Prediction::Real, 1.7, 1.0, 0.0));
    assert_eq!(high.confidence_percent, 170);
    assert_eq!(high.bar_fraction, 1.0);

    let low = ResultView::new(&result(Prediction::Real, -0.2, 1.0, 0.0));
    assert_eq!(low.bar_fraction, 0.0);

    let nan = ResultView::new(&result(Prediction::Real, f64::NAN, 1.0, 0.0));
    assert_eq!(nan.bar_fraction, 0.0);
}

#[test]
fn text_card_for_terminal() {
    let text = ResultView::new(&result(Prediction::Real, 0.87, 0.87, 0.13)).to_text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "✅ Real News");
    assert_eq!(lines[1], "REAL");
    assert_eq!(lines[2], "Confidence Level  87%");
    assert_eq!(lines[3], format!("[{}{}]", "#".repeat(17), "-".repeat(3)));
    assert_eq!(lines[4], "Real Probability  87%    Fake Probability  13%");
}

#[test]
fn wire_labels_decode() {
    let r: AnalysisResult = serde_json::from_str(
        r#"{"prediction":"Fake","confidence":0.64,"probabilities":{"real":0.36,"fake":0.64}}"#,
    )
    .unwrap();
    assert_eq!(r.prediction, Prediction::Fake);
    assert!(serde_json::from_str::<AnalysisResult>(r#"{"prediction":"fake","confidence":1,"probabilities":{"real":0,"fake":1}}"#).is_err());
}
