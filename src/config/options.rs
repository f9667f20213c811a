// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Which deployment the client talks to. Chosen once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildMode {
    Production,
    #[default]
    Development,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Production mode needs --origin <url> (or an explicit --endpoint)")]
    MissingOrigin,
    #[error("Missing value for {0}")]
    MissingValue(&'static str),
    #[error("Invalid value for {flag}: {value}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("Endpoint must be an http(s) URL: {0}")]
    BadEndpoint(String),
    #[error("Unknown arg: {0}")]
    UnknownArg(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self::development()
    }
}

impl ApiOptions {
    pub fn development() -> Self {
        Self {
            endpoint: join!(DEV_ORIGIN, PROD_PREDICT_PATH),
            timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
        }
    }

    /// The relative predict path resolved against a service origin.
    pub fn from_origin(origin: &str) -> Result<Self, OptionsError> {
        let origin = origin.trim().trim_end_matches('/');
        check_http_url(origin)?;
        Ok(Self {
            endpoint: join!(origin, PROD_PREDICT_PATH),
            timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
        })
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, OptionsError> {
        let endpoint = endpoint.trim();
        check_http_url(endpoint)?;
        Ok(Self {
            endpoint: s!(endpoint),
            timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
        })
    }

    /// `GET` target for the service health check: the predict endpoint's sibling.
    pub fn health_url(&self) -> String {
        let base = self
            .endpoint
            .strip_suffix(PREDICT_SUFFIX)
            .unwrap_or(self.endpoint.trim_end_matches('/'));
        join!(base, HEALTH_SUFFIX)
    }
}

fn check_http_url(url: &str) -> Result<(), OptionsError> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err(OptionsError::BadEndpoint(s!(url))),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub mode: BuildMode,
    pub api: ApiOptions,
    pub log_dir: PathBuf,

    // CLI-only
    pub text: Option<String>,
    pub health: bool,
    pub help: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            mode: BuildMode::Development,
            api: ApiOptions::development(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            text: None,
            health: false,
            help: false,
        }
    }
}

impl AppOptions {
    /// Parse everything after the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut opts = AppOptions::default();
        let mut origin: Option<String> = None;
        let mut endpoint: Option<String> = None;
        let mut timeout_ms: Option<u64> = None;

        let mut args = args.into_iter().map(Into::into);
        while let Some(a) = args.next() {
            match a.as_str() {
                "--production" | "--prod" => opts.mode = BuildMode::Production,
                "--development" | "--dev" => opts.mode = BuildMode::Development,
                "--origin" => origin = Some(args.next().ok_or(OptionsError::MissingValue("--origin"))?),
                "--endpoint" => endpoint = Some(args.next().ok_or(OptionsError::MissingValue("--endpoint"))?),
                "--timeout-ms" => {
                    let v = args.next().ok_or(OptionsError::MissingValue("--timeout-ms"))?;
                    let ms: u64 = v.parse().map_err(|_| OptionsError::InvalidValue {
                        flag: "--timeout-ms",
                        value: v.clone(),
                    })?;
                    if ms == 0 {
                        return Err(OptionsError::InvalidValue { flag: "--timeout-ms", value: v });
                    }
                    timeout_ms = Some(ms);
                }
                "--log-dir" => {
                    opts.log_dir = PathBuf::from(args.next().ok_or(OptionsError::MissingValue("--log-dir"))?)
                }
                "--text" | "-t" => opts.text = Some(args.next().ok_or(OptionsError::MissingValue("--text"))?),
                "--health" => opts.health = true,
                "-h" | "--help" => opts.help = true,
                _ => return Err(OptionsError::UnknownArg(a)),
            }
        }

        opts.api = match (endpoint, opts.mode) {
            (Some(ep), _) => ApiOptions::with_endpoint(&ep)?,
            (None, BuildMode::Production) => {
                ApiOptions::from_origin(origin.as_deref().ok_or(OptionsError::MissingOrigin)?)?
            }
            (None, BuildMode::Development) => match origin {
                Some(o) => ApiOptions::from_origin(&o)?,
                None => ApiOptions::development(),
            },
        };
        if let Some(ms) = timeout_ms {
            opts.api.timeout = Duration::from_millis(ms);
        }
        Ok(opts)
    }
}
