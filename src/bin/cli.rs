// src/bin/cli.rs
use color_eyre::eyre::{Result, eyre};
use soccer_factcheck::{cli, config::AppOptions, log};

fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = AppOptions::from_args(std::env::args().skip(1))?;
    if let Err(e) = log::init(&opts.log_dir) {
        eprintln!("Logging disabled: {e}");
    }

    cli::run(&opts).map_err(|e| eyre!("{e}"))
}
