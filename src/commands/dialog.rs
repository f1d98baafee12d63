//! Browser Dialogs
//!
//! Blocking `alert` / `confirm`, behind a trait so handlers can be driven in tests.

pub trait Dialogs {
    fn alert(&self, message: &str);
    /// True when the user accepted
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
