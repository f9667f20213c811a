// src/api/types.rs
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Prediction {
    Real,
    Fake,
}

impl Prediction {
    pub fn label(self) -> &'static str {
        match self {
            Prediction::Real => "Real",
            Prediction::Fake => "Fake",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Probabilities {
    pub real: f64,
    pub fake: f64,
}

/// Verdict as returned by the service. Numbers are taken as-is: no range
/// check on `confidence` and no `real + fake == 1` check.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub prediction: Prediction,
    pub confidence: f64,
    pub probabilities: Probabilities,
}

/// Body of a non-2xx reply.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}
