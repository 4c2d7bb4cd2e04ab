use leptos::ev;
use leptos::prelude::*;

/// Run `action` whenever `code` (e.g. "Enter", "Escape") is pressed anywhere
/// in the window. The listener is attached now and removed when the calling
/// component is unmounted.
pub fn use_key(code: &'static str, action: impl Fn() + 'static) {
    let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if is_key(&ev.code(), code) {
            action();
        }
    });
    on_cleanup(move || handle.remove());
}

/// Key codes are compared case-insensitively ("Escape" and "escape" match).
fn is_key(pressed: &str, code: &str) -> bool {
    pressed.eq_ignore_ascii_case(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_key_matches_code() {
        assert!(is_key("Escape", "Escape"));
        assert!(is_key("enter", "Enter"));
        assert!(!is_key("NumpadEnter", "Enter"));
        assert!(!is_key("KeyE", "Escape"));
    }
}
