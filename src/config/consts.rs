// src/config/consts.rs

// Endpoints
pub const PROD_PREDICT_PATH: &str = "/api/predict";
pub const DEV_ORIGIN: &str = "http://localhost:5000";
pub const PREDICT_SUFFIX: &str = "/predict";
pub const HEALTH_SUFFIX: &str = "/health";

// Request
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;
// Counter denominator only; input length is not limited.
pub const MAX_TEXT_CHARS: usize = 10_000;
pub const MAX_RESPONSE_BYTES: u64 = 64 * 1024;

// User-facing messages
pub const MSG_EMPTY_TEXT: &str = "Please enter some news text to analyze.";
pub const MSG_TIMEOUT: &str = "Request timeout. Please try again.";
pub const MSG_GENERIC: &str = "Failed to analyze news. Please try again.";

// Local files
pub const DEFAULT_LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const APP_TITLE: &str = "Soccer News Fact-Checker";
pub const WINDOW_W: u32 = 900;
pub const WINDOW_H: u32 = 820;
