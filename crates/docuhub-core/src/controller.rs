//! The document editor controller.
//!
//! One controller owns the editor's transient state and drives the page
//! through the [`EditorView`] and [`EditorWidget`] capabilities. It is cheap
//! to clone (all clones share state) so event handlers can each hold one.
//!
//! The controller is single-threaded: state lives in a `RefCell` and no
//! borrow is held across an `.await`.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use crate::{
    api::DocumentApi,
    config::EditorConfig,
    error::ApiError,
    markdown::render_markdown,
    model::Theme,
    session::Session,
    status::{StatusMessage, StatusTimer},
    surface::{EditorMode, EditorView, EditorWidget, Navigator, PreviewPane, TreePane},
    tree::{build_tree, count_leaves},
};

const LOADING_TEXT: &str = "Loading...";

/// Decode failures log at error level, everything else at warn.
fn log_failure(action: &str, err: &ApiError) {
    match err {
        ApiError::Decode(_) => log::error!("failed to {action}: {err}"),
        _ => log::warn!("failed to {action}: {err}"),
    }
}

/// Snapshot of the controller's transient state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    /// Path of the selected document.
    pub active_path: Option<String>,
    /// Whether the active document's content was fetched successfully.
    pub loaded: bool,
    /// Edited since the last load or successful save.
    pub dirty: bool,
    pub save_enabled: bool,
    pub publish_enabled: bool,
    pub saving: bool,
    pub publishing: bool,
    pub mode: EditorMode,
    /// Sequence number of the latest content load.
    pub load_seq: u64,
    /// Identifies the newest status message.
    pub status_generation: u64,
    /// Set once the browser has been sent to the login route.
    pub redirected: bool,
}

struct Inner<A> {
    config: EditorConfig,
    api: A,
    session: Session,
    view: Rc<dyn EditorView>,
    navigator: Rc<dyn Navigator>,
    timer: Rc<dyn StatusTimer>,
    editor: RefCell<Option<Rc<dyn EditorWidget>>>,
    state: RefCell<EditorState>,
}

/// Coordinates the file tree, editor, preview, save and publish actions.
pub struct EditorController<A> {
    inner: Rc<Inner<A>>,
}

impl<A> Clone for EditorController<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: DocumentApi + 'static> EditorController<A> {
    /// Create a controller. Nothing happens until [`EditorController::start`].
    pub fn new(
        config: EditorConfig,
        api: A,
        session: Session,
        view: Rc<dyn EditorView>,
        navigator: Rc<dyn Navigator>,
        timer: Rc<dyn StatusTimer>,
    ) -> Self {
        let state = EditorState {
            publish_enabled: true,
            ..EditorState::default()
        };
        Self {
            inner: Rc::new(Inner {
                config,
                api,
                session,
                view,
                navigator,
                timer,
                editor: RefCell::new(None),
                state: RefCell::new(state),
            }),
        }
    }

    fn from_weak(weak: &Weak<Inner<A>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.inner.config
    }

    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Copy of the current transient state.
    pub fn state(&self) -> EditorState {
        self.inner.state.borrow().clone()
    }

    pub fn theme(&self) -> Theme {
        self.inner.session.theme()
    }

    /// Attach the edit widget and subscribe to its change and mode events.
    pub fn attach_editor(&self, widget: Rc<dyn EditorWidget>) {
        let weak = Rc::downgrade(&self.inner);
        widget.on_change(Box::new(move || {
            if let Some(controller) = Self::from_weak(&weak) {
                controller.handle_change();
            }
        }));

        let weak = Rc::downgrade(&self.inner);
        widget.on_mode_change(Box::new(move |mode| {
            if let Some(controller) = Self::from_weak(&weak) {
                controller.handle_mode_change(mode);
            }
        }));

        self.inner.state.borrow_mut().mode = widget.mode();
        self.inner.editor.replace(Some(widget));
    }

    fn editor(&self) -> Option<Rc<dyn EditorWidget>> {
        self.inner.editor.borrow().clone()
    }

    fn is_redirected(&self) -> bool {
        self.inner.state.borrow().redirected
    }

    /// Auth gate, theme restore, initial tree load.
    ///
    /// Returns `false` when the session has no token; the browser has then
    /// been sent to the login route and nothing else was done.
    pub async fn start(&self) -> bool {
        if !self.inner.session.is_authenticated() {
            log::debug!("no session token, redirecting to login");
            self.redirect_to_login();
            return false;
        }

        self.apply_theme(self.inner.session.theme());
        self.set_save_enabled(false);
        self.set_publish_enabled(true);
        self.inner.view.show_preview(PreviewPane::Placeholder);
        self.load_tree().await;
        true
    }

    /// Clear the stored token and leave for the login route.
    pub fn logout(&self) {
        log::info!("logging out");
        self.inner.session.clear_token();
        self.redirect_to_login();
    }

    fn redirect_to_login(&self) {
        self.inner.state.borrow_mut().redirected = true;
        self.inner.navigator.redirect(&self.inner.config.login_route);
    }

    /// Token for the next request, redirecting when there is none.
    fn token(&self) -> Option<String> {
        if self.is_redirected() {
            return None;
        }
        let token = self.inner.session.token();
        if token.is_none() {
            self.redirect_to_login();
        }
        token
    }

    /// Set the theme attribute and indicator and persist the preference.
    pub fn apply_theme(&self, theme: Theme) {
        self.inner.session.set_theme(theme);
        self.inner.view.apply_theme(theme);
    }

    pub fn toggle_theme(&self) {
        self.apply_theme(self.inner.session.theme().toggled());
    }

    /// Fetch the listing and repopulate the tree pane.
    pub async fn load_tree(&self) {
        let Some(token) = self.token() else {
            return;
        };

        self.inner.view.show_tree(TreePane::Loading);
        let result = self.inner.api.fetch_tree(&token).await;
        if self.is_redirected() {
            return;
        }

        let pane = match result {
            Ok(nodes) => {
                let items = build_tree(&nodes, &self.inner.config.file_filter());
                log::debug!(
                    "tree loaded: {} entries, {} documents",
                    items.len(),
                    count_leaves(&items)
                );
                if items.is_empty() {
                    TreePane::Empty
                } else {
                    TreePane::Ready(items)
                }
            }
            Err(err) if err.is_unauthorized() => {
                self.redirect_to_login();
                return;
            }
            Err(err) => {
                log_failure("load file tree", &err);
                TreePane::Error(err.to_string())
            }
        };
        self.inner.view.show_tree(pane);
    }

    /// Select `path` and load its content into the editor.
    pub async fn load_content(&self, path: &str) {
        let Some(token) = self.token() else {
            return;
        };

        let seq = {
            let mut state = self.inner.state.borrow_mut();
            state.active_path = Some(path.to_string());
            state.loaded = false;
            state.dirty = false;
            state.load_seq += 1;
            state.load_seq
        };
        self.inner.view.set_active_path(Some(path.to_string()));
        self.inner.view.set_dirty(false);
        self.set_save_enabled(false);
        self.inner.view.show_preview(PreviewPane::Loading);
        if let Some(editor) = self.editor() {
            editor.set_value(LOADING_TEXT);
        }

        let result = self.inner.api.fetch_content(&token, path).await;
        if self.is_redirected() {
            return;
        }
        if self.inner.state.borrow().load_seq != seq {
            log::debug!("discarding superseded response for {path}");
            return;
        }

        match result {
            Ok(document) => {
                if let Some(editor) = self.editor() {
                    editor.set_value(&document.content);
                    editor.clear_history();
                    editor.focus();
                }
                self.inner.state.borrow_mut().loaded = true;
                self.refresh_preview(PreviewPane::Idle);
                self.set_save_enabled(true);
                self.post_status(
                    StatusMessage::info(format!("File '{path}' loaded.")),
                    Some(self.inner.config.status_delay()),
                );
            }
            Err(err) if err.is_unauthorized() => self.redirect_to_login(),
            Err(err) => {
                log_failure(&format!("load {path}"), &err);
                if let Some(editor) = self.editor() {
                    editor.set_value(&format!("## Error loading {path}\n\n{err}"));
                    editor.clear_history();
                }
                self.refresh_preview(PreviewPane::Idle);
                self.post_status(
                    StatusMessage::error(format!("Error loading: {err}")),
                    Some(self.inner.config.status_delay()),
                );
            }
        }
    }

    /// Post the editor text back to the active document.
    pub async fn save(&self) {
        if self.is_redirected() {
            return;
        }

        let target = {
            let state = self.inner.state.borrow();
            if state.saving {
                return;
            }
            state.active_path.clone().filter(|_| state.loaded)
        };
        let (Some(path), Some(editor)) = (target, self.editor()) else {
            self.post_status(
                StatusMessage::info("No active file to save."),
                Some(self.inner.config.status_delay()),
            );
            return;
        };
        let Some(token) = self.token() else {
            return;
        };

        self.inner.state.borrow_mut().saving = true;
        self.set_save_enabled(false);
        self.post_status(StatusMessage::info("Saving..."), None);

        let content = editor.value();
        let result = self
            .inner
            .api
            .save_content(&token, &path, &content)
            .await;
        if self.is_redirected() {
            return;
        }

        let (still_loaded, clean) = {
            let mut state = self.inner.state.borrow_mut();
            state.saving = false;
            let same_document = state.active_path.as_deref() == Some(path.as_str());
            (state.loaded, same_document && state.loaded)
        };

        let message = match result {
            Ok(receipt) => {
                log::info!("saved {path}");
                if clean && editor.value() == content {
                    self.set_dirty(false);
                }
                StatusMessage::success(
                    receipt
                        .message
                        .unwrap_or_else(|| "File saved successfully!".to_string()),
                )
            }
            Err(err) if err.is_unauthorized() => {
                self.redirect_to_login();
                return;
            }
            Err(err) => {
                log_failure(&format!("save {path}"), &err);
                StatusMessage::error(format!("Error saving: {err}"))
            }
        };

        self.set_save_enabled(still_loaded);
        self.post_status(message, Some(self.inner.config.save_status_delay()));
    }

    /// Ask the backend to publish the site.
    pub async fn publish(&self) {
        if self.inner.state.borrow().publishing {
            return;
        }
        let Some(token) = self.token() else {
            return;
        };

        self.inner.state.borrow_mut().publishing = true;
        self.set_publish_enabled(false);
        self.post_status(StatusMessage::info("Publishing..."), None);

        let result = self.inner.api.publish(&token).await;
        if self.is_redirected() {
            return;
        }
        self.inner.state.borrow_mut().publishing = false;

        let message = match result {
            Ok(receipt) => {
                log::info!("site published");
                StatusMessage::success(
                    receipt
                        .message
                        .unwrap_or_else(|| "Site published!".to_string()),
                )
            }
            Err(err) if err.is_unauthorized() => {
                self.redirect_to_login();
                return;
            }
            Err(err) => {
                log_failure("publish", &err);
                StatusMessage::error(format!("Error publishing: {err}"))
            }
        };

        self.set_publish_enabled(true);
        self.post_status(message, Some(self.inner.config.status_delay()));
    }

    fn handle_change(&self) {
        if self.is_redirected() {
            return;
        }
        let (loaded, saving, mode) = {
            let state = self.inner.state.borrow();
            (state.loaded, state.saving, state.mode)
        };
        if loaded {
            self.set_dirty(true);
        }
        self.set_save_enabled(loaded && !saving);
        if mode.shows_preview() {
            self.render_preview();
        }
    }

    fn handle_mode_change(&self, mode: EditorMode) {
        log::debug!("editor mode changed to {mode:?}");
        self.inner.state.borrow_mut().mode = mode;
        self.inner
            .view
            .set_side_by_side(mode == EditorMode::SideBySide);
        if mode.shows_preview() {
            self.render_preview();
        }
    }

    /// Render the preview when a preview mode is active, else show `idle`.
    fn refresh_preview(&self, idle: PreviewPane) {
        if self.inner.state.borrow().mode.shows_preview() {
            self.render_preview();
        } else {
            self.inner.view.show_preview(idle);
        }
    }

    fn render_preview(&self) {
        let Some(editor) = self.editor() else {
            return;
        };
        let html = render_markdown(&editor.value());
        self.inner.view.show_preview(PreviewPane::Rendered(html));
    }

    fn set_save_enabled(&self, enabled: bool) {
        self.inner.state.borrow_mut().save_enabled = enabled;
        self.inner.view.set_save_enabled(enabled);
    }

    fn set_publish_enabled(&self, enabled: bool) {
        self.inner.state.borrow_mut().publish_enabled = enabled;
        self.inner.view.set_publish_enabled(enabled);
    }

    fn set_dirty(&self, dirty: bool) {
        self.inner.state.borrow_mut().dirty = dirty;
        self.inner.view.set_dirty(dirty);
    }

    /// Show `message`; with a delay, clear it later unless superseded.
    fn post_status(&self, message: StatusMessage, clear_after: Option<Duration>) {
        let generation = {
            let mut state = self.inner.state.borrow_mut();
            state.status_generation += 1;
            state.status_generation
        };
        self.inner.view.show_status(Some(message));

        if let Some(delay) = clear_after {
            let weak = Rc::downgrade(&self.inner);
            self.inner.timer.schedule(
                delay,
                Box::new(move || {
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    if inner.state.borrow().status_generation == generation {
                        inner.view.show_status(None);
                    }
                }),
            );
        }
    }
}
