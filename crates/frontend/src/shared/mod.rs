pub mod api_utils;
pub mod components;
pub mod form;
pub mod gateway;
pub mod icons;
pub mod list;
pub mod toast;

/// Browser confirm dialog; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
