//! Session state: bearer token and theme preference.
//!
//! The session is read once from a [`SessionStore`] when the controller is
//! built. Afterwards the in-memory copy is authoritative; writes go through
//! to the store so the next page load sees them.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use crate::{config::EditorConfig, model::Theme};

/// Persistent key/value storage (browser `localStorage` in production).
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Explicit session state injected into the controller.
pub struct Session {
    store: Rc<dyn SessionStore>,
    token_key: String,
    theme_key: String,
    token: RefCell<Option<String>>,
    theme: Cell<Theme>,
}

impl Session {
    /// Read the token and theme preference from `store`.
    pub fn load(store: Rc<dyn SessionStore>, config: &EditorConfig) -> Self {
        let token = store
            .get(&config.token_key)
            .filter(|token| !token.trim().is_empty());
        let theme = store
            .get(&config.theme_key)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();

        Self {
            store,
            token_key: config.token_key.clone(),
            theme_key: config.theme_key.clone(),
            token: RefCell::new(token),
            theme: Cell::new(theme),
        }
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Remember and persist the theme preference.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.store.set(&self.theme_key, theme.as_str());
    }

    /// Forget the token (logout).
    pub fn clear_token(&self) {
        self.token.replace(None);
        self.store.remove(&self.token_key);
    }
}
