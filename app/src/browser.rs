//! Browser-backed implementations of the controller's session, navigation
//! and timer capabilities.

use std::time::Duration;

use docuhub_core::{Navigator, SessionStore, StatusTimer};
use wasm_bindgen::{JsCast, closure::Closure};

/// [`SessionStore`] over `window.localStorage`.
///
/// When storage is unavailable (private mode, sandboxed iframe) reads return
/// nothing and writes are dropped.
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage is not available; session will not persist");
        }
        Self { storage }
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to persist {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}

/// Full-page navigation through `window.location`.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, route: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(route) {
            log::error!("failed to navigate to {route}: {err:?}");
        }
    }
}

/// [`StatusTimer`] over `window.setTimeout`.
pub struct BrowserTimer;

impl StatusTimer for BrowserTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let callback = Closure::once_into_js(move || task());
        if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            millis,
        ) {
            log::error!("failed to schedule timer: {err:?}");
        }
    }
}
