// src/notify.rs
/// Wake-up hook for work finishing off the UI thread.
/// Frontends implement this so a settled request shows up without user input.
pub trait Notify: Send + Sync {
    /// Called from the worker thread once its outcome has been sent.
    fn settled(&self) {}
}

/// A no-op sink (CLI, tests).
pub struct NullNotify;
impl Notify for NullNotify {}
