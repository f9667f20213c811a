// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    api::{Classifier, HttpClassifier},
    config::{AppState, consts::APP_TITLE},
    form::FormController,
};

use super::{
    components::{footer, header, news_form},
    notify::GuiNotify,
};

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(state, &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // the only stateful piece of the page
    pub form: FormController,

    // footer line; the startup health check thread writes here
    pub service: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let classifier = Arc::new(HttpClassifier::new(state.options.api.clone()));
        logf!(
            "Init: mode={:?} endpoint={} timeout={}ms",
            state.options.mode,
            state.options.api.endpoint,
            state.options.api.timeout.as_millis()
        );

        let service = Arc::new(Mutex::new(s!("Service: checking…")));
        spawn_health_check(Arc::clone(&classifier), Arc::clone(&service), ctx.clone());

        let classifier: Arc<dyn Classifier> = classifier;
        let notify = Arc::new(GuiNotify::new(ctx.clone()));
        Self {
            form: FormController::with_notify(classifier, notify),
            service,
        }
    }

    pub fn service_line(&self) -> String {
        self.service.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

fn spawn_health_check(classifier: Arc<HttpClassifier>, line: Arc<Mutex<String>>, ctx: egui::Context) {
    thread::spawn(move || {
        let msg = match classifier.health() {
            Ok(h) if h.is_healthy() => s!("Service: healthy"),
            Ok(h) => {
                logd!("Health: status={} model_loaded={}", h.status, h.model_loaded);
                s!("Service: model not loaded")
            }
            Err(e) => {
                loge!("Health: {}", e);
                s!("Service: unreachable")
            }
        };
        if let Ok(mut guard) = line.lock() {
            *guard = msg;
        }
        ctx.request_repaint();
    });
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.form.poll();

        egui::TopBottomPanel::top("header")
            .frame(header::frame())
            .show(ctx, |ui| header::draw(ui));

        let service = self.service_line();
        egui::TopBottomPanel::bottom("footer")
            .frame(footer::frame())
            .show(ctx, |ui| footer::draw(ui, &service));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                news_form::draw(ui, &mut self.form);
            });
        });
    }
}
