//! Window-width tracking for responsive layout decisions.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Viewport width at or below which panels switch to compact layout.
pub const COMPACT_MAX_WIDTH: f64 = 768.0;

/// Current window inner width in CSS pixels.
///
/// Seeded from the window on creation, updated on every `resize` event.
/// `None` when no window is available.
pub fn use_window_width() -> ReadSignal<Option<f64>> {
    let (width, set_width) = signal(current_width());

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };

        let handler = Closure::wrap(Box::new(move || {
            set_width.set(current_width());
        }) as Box<dyn FnMut()>);

        let _ =
            window.add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref());
        handler.forget();
    });

    width
}

fn current_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// Compact when the width is known and does not exceed [`COMPACT_MAX_WIDTH`].
pub fn is_compact(width: Option<f64>) -> bool {
    matches!(width, Some(w) if w <= COMPACT_MAX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_compact() {
        assert!(is_compact(Some(320.0)));
        assert!(is_compact(Some(768.0)));
        assert!(!is_compact(Some(768.5)));
        assert!(!is_compact(Some(1280.0)));
    }

    #[test]
    fn unknown_width_is_not_compact() {
        assert!(!is_compact(None));
    }
}
