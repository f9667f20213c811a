// src/gui/notify.rs
use eframe::egui;

use crate::notify::Notify;

/// Repaints the window when a request settles off the UI thread.
pub struct GuiNotify {
    ctx: egui::Context,
}

impl GuiNotify {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl Notify for GuiNotify {
    fn settled(&self) {
        self.ctx.request_repaint();
    }
}
