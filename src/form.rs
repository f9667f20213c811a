// src/form.rs
//
// The news form: input text, loading flag, error banner, last verdict.
// Only this controller mutates that state. A submission runs on one worker
// thread and comes back through a channel that the controller owns; when the
// controller is dropped the receiver goes with it and a late answer is
// discarded by the failed send.

use std::sync::{
    Arc,
    mpsc::{self, Receiver, TryRecvError},
};
use std::thread;

use crate::{
    api::{AnalysisResult, AnalyzeError, Classifier},
    notify::{Notify, NullNotify},
};

type Outcome = Result<AnalysisResult, AnalyzeError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was made.
    Rejected,
    /// A request is already outstanding; nothing new was sent.
    Busy,
    /// One request is now in flight.
    Sent,
}

pub struct FormController {
    classifier: Arc<dyn Classifier>,
    notify: Arc<dyn Notify>,

    text: String,
    result: Option<AnalysisResult>,
    loading: bool,
    error: Option<String>,

    pending: Option<Receiver<Outcome>>,
}

impl FormController {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self::with_notify(classifier, Arc::new(NullNotify))
    }

    pub fn with_notify(classifier: Arc<dyn Classifier>, notify: Arc<dyn Notify>) -> Self {
        Self {
            classifier,
            notify,
            text: s!(),
            result: None,
            loading: false,
            error: None,
            pending: None,
        }
    }

    /* ---------- read-only view ---------- */

    #[inline]
    pub fn text(&self) -> &str { &self.text }

    #[inline]
    pub fn result(&self) -> Option<&AnalysisResult> { self.result.as_ref() }

    #[inline]
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }

    #[inline]
    pub fn is_loading(&self) -> bool { self.loading }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.text.trim().is_empty()
    }

    pub fn can_clear(&self) -> bool {
        !self.loading && !self.text.is_empty()
    }

    pub fn status(&self) -> FormStatus {
        if self.loading {
            FormStatus::Submitting
        } else if self.error.is_some() {
            FormStatus::Failed
        } else if self.result.is_some() {
            FormStatus::Success
        } else {
            FormStatus::Idle
        }
    }

    /* ---------- input ---------- */

    /// The text box binds straight to this.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /* ---------- actions ---------- */

    /// Validate the current text and, if it passes, send exactly one request
    /// carrying the trimmed text.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.loading {
            logd!("Form: submit ignored, request already in flight");
            return SubmitOutcome::Busy;
        }

        let trimmed = self.text.trim();
        if let Err(e) = validate(trimmed) {
            logd!("Form: rejected ({})", e);
            self.error = Some(e.user_message());
            return SubmitOutcome::Rejected;
        }
        let payload = s!(trimmed);

        self.error = None;
        self.result = None;
        self.loading = true;

        let (tx, rx) = mpsc::channel();
        let classifier = Arc::clone(&self.classifier);
        let notify = Arc::clone(&self.notify);
        thread::spawn(move || {
            let outcome = classifier.analyze(&payload);
            // Receiver gone means the form was dropped; nothing to update.
            if tx.send(outcome).is_ok() {
                notify.settled();
            }
        });
        self.pending = Some(rx);

        SubmitOutcome::Sent
    }

    /// Reset text, verdict and banner. An in-flight request is left alone and
    /// still lands when it settles.
    pub fn clear(&mut self) {
        self.text.clear();
        self.result = None;
        self.error = None;
    }

    /// Non-blocking: settle if the worker has answered. Returns true when the
    /// state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                Err(AnalyzeError::Transport(s!("worker ended without an answer")))
            }
        };
        self.settle(outcome);
        true
    }

    /// Blocking: wait for the outstanding request, if any, and settle.
    /// The transport timeout bounds the wait.
    pub fn wait(&mut self) -> FormStatus {
        if let Some(rx) = &self.pending {
            let outcome = rx
                .recv()
                .unwrap_or_else(|_| Err(AnalyzeError::Transport(s!("worker ended without an answer"))));
            self.settle(outcome);
        }
        self.status()
    }

    fn settle(&mut self, outcome: Outcome) {
        self.pending = None;
        self.loading = false;
        match outcome {
            Ok(result) => {
                logf!(
                    "Form: verdict {} ({:.0}%)",
                    result.prediction.label(),
                    result.confidence * 100.0
                );
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                loge!("API Error: {}", e);
                self.result = None;
                self.error = Some(e.user_message());
            }
        }
    }
}

/// The only rule checked before a request: non-empty after trimming. Length
/// is not limited here; the counter in the form is informational.
pub fn validate(trimmed: &str) -> Result<(), AnalyzeError> {
    if trimmed.is_empty() {
        return Err(AnalyzeError::EmptyText);
    }
    Ok(())
}
