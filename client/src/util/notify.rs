//! Blocking user notifications.

/// Show `message` in a browser alert.
pub fn alert(message: &str) {
    log::info!("alert: {message}");
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("no window; alert suppressed");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}");
        }
    }
}
