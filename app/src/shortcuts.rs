//! Global keyboard shortcuts.

use leptos::prelude::*;

/// Actions bound to window-level keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// F9
    ToggleSideBySide,
    /// Ctrl+S or Cmd+S
    Save,
}

/// Map a keydown to a shortcut.
pub fn shortcut_for(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    match key {
        "F9" => Some(Shortcut::ToggleSideBySide),
        "s" | "S" if ctrl || meta => Some(Shortcut::Save),
        _ => None,
    }
}

/// Registers the editor's keydown handler on the window.
#[component]
pub fn EditorShortcuts(
    /// F9 handler.
    on_toggle_side_by_side: Callback<()>,
    /// Ctrl/Cmd+S handler.
    on_save: Callback<()>,
) -> impl IntoView {
    Effect::new(move |_| {
        use wasm_bindgen::{JsCast, prelude::*};

        let handler =
            Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
                match shortcut_for(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
                    Some(Shortcut::ToggleSideBySide) => {
                        ev.prevent_default();
                        on_toggle_side_by_side.run(());
                    }
                    Some(Shortcut::Save) => {
                        // Keep the browser's "save page" dialog away.
                        ev.prevent_default();
                        on_save.run(());
                    }
                    None => {}
                }
            });

        let Some(window) = web_sys::window() else {
            return;
        };
        let _ =
            window.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());

        // Leak the closure to keep it alive
        handler.forget();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_mapping() {
        assert_eq!(shortcut_for("F9", false, false), Some(Shortcut::ToggleSideBySide));
        assert_eq!(shortcut_for("s", true, false), Some(Shortcut::Save));
        assert_eq!(shortcut_for("s", false, true), Some(Shortcut::Save));
        assert_eq!(shortcut_for("s", false, false), None);
        assert_eq!(shortcut_for("k", true, false), None);
    }
}
