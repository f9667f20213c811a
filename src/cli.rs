// src/cli.rs
use std::{
    error::Error,
    io::{Read, Write},
    sync::Arc,
};

use crate::{
    api::{Classifier, HttpClassifier},
    config::AppOptions,
    form::{FormController, SubmitOutcome},
    render::ResultView,
};

pub const HELP: &str = include_str!("cli_help.txt");

/// Run one analysis (or a health check) against the configured service.
pub fn run(opts: &AppOptions) -> Result<(), Box<dyn Error>> {
    if opts.help {
        println!("{HELP}");
        return Ok(());
    }

    let http = Arc::new(HttpClassifier::new(opts.api.clone()));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if opts.health {
        let h = http.health()?;
        writeln!(out, "status={} model_loaded={}", h.status, h.model_loaded)?;
        if !h.is_healthy() {
            return Err("service is not ready".into());
        }
        return Ok(());
    }

    run_with(opts, http, &mut std::io::stdin().lock(), &mut out)
}

/// Same flow as the form on the page: validate, one request, print the card
/// or fail with the banner text.
pub fn run_with(
    opts: &AppOptions,
    classifier: Arc<dyn Classifier>,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    let text = match &opts.text {
        Some(t) => t.clone(),
        None => {
            let mut buf = s!();
            input.read_to_string(&mut buf)?;
            buf
        }
    };

    let mut form = FormController::new(classifier);
    form.set_text(text);

    if form.submit() == SubmitOutcome::Rejected {
        return Err(s!(form.error().unwrap_or_default()).into());
    }
    form.wait();

    if let Some(result) = form.result() {
        write!(out, "{}", ResultView::new(result).to_text())?;
        out.flush()?;
        return Ok(());
    }
    Err(s!(form.error().unwrap_or_default()).into())
}
