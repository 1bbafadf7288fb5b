/// Blocking confirmation after a successful save.
///
/// On the web this is `window.alert`; elsewhere the message is only logged.
pub fn show_confirmation(message: &str) {
    tracing::info!("{message}");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                tracing::warn!("confirmation alert failed: {err:?}");
            }
        }
    }
}
