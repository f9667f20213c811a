// src/api/client.rs
//
// One POST per analysis. The ureq agent carries the overall timeout, so a
// stalled service surfaces as a transport timeout and never blocks the caller
// for longer than ApiOptions::timeout.

use std::io::{self, Read};

use super::{
    error::AnalyzeError,
    types::{AnalysisResult, AnalyzeRequest, ErrorBody, HealthStatus},
};
use crate::config::{ApiOptions, consts::MAX_RESPONSE_BYTES};

/// Anything that can turn news text into a verdict.
pub trait Classifier: Send + Sync {
    fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalyzeError>;
}

pub struct HttpClassifier {
    agent: ureq::Agent,
    options: ApiOptions,
}

impl HttpClassifier {
    pub fn new(options: ApiOptions) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(options.timeout).build();
        Self { agent, options }
    }

    /// Ask the service whether it is up and has a model loaded.
    pub fn health(&self) -> Result<HealthStatus, AnalyzeError> {
        let url = self.options.health_url();
        logd!("Health: GET {}", url);

        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(map_ureq_error)?;
        let body = read_body(response)?;
        serde_json::from_str(&body).map_err(|e| AnalyzeError::Decode(e.to_string()))
    }
}

impl Classifier for HttpClassifier {
    fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalyzeError> {
        let request = AnalyzeRequest { text: s!(text) };
        logf!(
            "Analyze: POST {} chars={} timeout={}ms",
            self.options.endpoint,
            text.chars().count(),
            self.options.timeout.as_millis()
        );

        let response = self
            .agent
            .post(&self.options.endpoint)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .send_json(&request)
            .map_err(map_ureq_error)?;

        let body = read_body(response)?;
        let result: AnalysisResult = serde_json::from_str(body.trim())
            .map_err(|e| AnalyzeError::Decode(format!("{e}: {}", body.trim())))?;

        logf!(
            "Analyze: OK prediction={} confidence={:.4}",
            result.prediction.label(),
            result.confidence
        );
        Ok(result)
    }
}

fn map_ureq_error(err: ureq::Error) -> AnalyzeError {
    match err {
        ureq::Error::Status(status, response) => {
            let body = read_body(response).unwrap_or_default();
            map_status(status, &body)
        }
        ureq::Error::Transport(t) => {
            if transport_timed_out(&t) {
                AnalyzeError::Timeout
            } else {
                AnalyzeError::Transport(t.to_string())
            }
        }
    }
}

/// Non-2xx reply: the service's own `error` text wins, anything else is generic.
pub(crate) fn map_status(status: u16, body: &str) -> AnalyzeError {
    let message = serde_json::from_str::<ErrorBody>(body.trim())
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty());

    match message {
        Some(message) => AnalyzeError::Server { status, message },
        None => AnalyzeError::Status { status },
    }
}

fn transport_timed_out(err: &ureq::Transport) -> bool {
    let io_kind = std::error::Error::source(err)
        .and_then(|src| src.downcast_ref::<io::Error>())
        .map(io::Error::kind);

    io_kind.is_some_and(is_timeout_kind) || err.to_string().contains("timed out")
}

fn is_timeout_kind(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

fn read_body(response: ureq::Response) -> Result<String, AnalyzeError> {
    let mut body = String::new();
    response
        .into_reader()
        .take(MAX_RESPONSE_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| {
            if is_timeout_kind(e.kind()) {
                AnalyzeError::Timeout
            } else {
                AnalyzeError::Transport(e.to_string())
            }
        })?;
    Ok(body)
}
