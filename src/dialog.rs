//! Browser Dialogs
//!
//! Blocking alerts and the print dialog.

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

pub fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.print() {
            log::warn!("print failed: {:?}", e);
        }
    }
}
