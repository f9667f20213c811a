// src/api/mod.rs

pub mod client;
pub mod error;
pub mod types;

pub use client::{Classifier, HttpClassifier};
pub use error::AnalyzeError;
pub use types::{AnalysisResult, AnalyzeRequest, HealthStatus, Prediction, Probabilities};
