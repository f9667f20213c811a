// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use soccer_factcheck::{
    config::{AppOptions, AppState, consts::APP_TITLE},
    cli, gui, log,
};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/icon.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    let opts = match AppOptions::from_args(std::env::args().skip(1)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    if opts.help {
        println!("{}", cli::HELP);
        return;
    }
    if let Err(e) = log::init(&opts.log_dir) {
        eprintln!("Logging disabled: {e}");
    }

    let state = AppState::new(opts);
    let mut viewport = ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size(state.gui.inner_size());
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(state, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
