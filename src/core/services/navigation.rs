pub const SIGN_IN_PATH: &str = "/signin";

/// Hard navigation to the sign-in entry point, dropping all in-memory state.
pub fn redirect_to_sign_in() {
    log::info!("Redirecting to {}", SIGN_IN_PATH);
    if let Some(window) = web_sys::window() {
        if window.location().set_href(SIGN_IN_PATH).is_err() {
            log::error!("Failed to navigate to {}", SIGN_IN_PATH);
        }
    }
}
