//! DocuHub editor UI.
//!
//! Leptos components for the editor page plus the browser implementations of
//! the `docuhub-core` capability traits (HTTP, storage, navigation, timers).

pub mod actions;
pub mod api;
pub mod browser;
pub mod config;
pub mod editor;
pub mod format;
pub mod shortcuts;
pub mod state;
pub mod theme;
pub mod tree;

use std::rc::Rc;

use docuhub_core::{
    EditorConfig, EditorController, EditorMode, PreviewPane, Session, SessionStore,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

pub use api::HttpDocumentApi;
pub use config::{CONFIG_URL, fetch_config};
pub use state::{Controller, ControllerHandle, EditorSignals};

use crate::{
    actions::{ActionBar, StatusLine, document_title},
    browser::{BrowserNavigator, BrowserStorage, BrowserTimer},
    editor::{MarkdownEditor, TextareaWidget, WidgetHandle},
    shortcuts::EditorShortcuts,
    state::preview_html,
    theme::ThemeSwitcher,
    tree::FileTree,
};

/// Wire the browser adapters into a controller that reports to `signals`.
pub fn build_controller(config: EditorConfig, signals: EditorSignals) -> Controller {
    let store: Rc<dyn SessionStore> = Rc::new(BrowserStorage::new());
    let session = Session::load(store, &config);
    let api = HttpDocumentApi::new(&config);
    EditorController::new(
        config,
        api,
        session,
        Rc::new(signals),
        Rc::new(BrowserNavigator),
        Rc::new(BrowserTimer),
    )
}

#[component]
pub fn App(
    /// Runtime configuration, usually fetched from `/config.json`.
    config: EditorConfig,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let signals = EditorSignals::new();
    let widget = Rc::new(TextareaWidget::new());
    let controller = build_controller(config, signals);
    controller.attach_editor(widget.clone());

    let controller = StoredValue::new_local(controller);
    let widget = StoredValue::new_local(widget);

    view! {
        <Title text=move || {
            document_title(signals.active_path.get().as_deref(), signals.dirty.get())
        } />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || {
                        view! { <EditorPage signals=signals controller=controller widget=widget /> }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Tree, editor, preview and actions.
#[component]
fn EditorPage(
    signals: EditorSignals,
    controller: ControllerHandle,
    widget: WidgetHandle,
) -> impl IntoView {
    let mode = widget.with_value(|w| w.mode_signal());

    // Only the editor route runs the auth gate; other routes never redirect.
    let starting = controller.get_value();
    spawn_local(async move {
        if !starting.start().await {
            log::info!("no session, left for the login page");
        }
    });

    let on_select = Callback::new(move |path: String| {
        let controller = controller.get_value();
        spawn_local(async move { controller.load_content(&path).await });
    });
    let on_save = Callback::new(move |_: ()| {
        let controller = controller.get_value();
        spawn_local(async move { controller.save().await });
    });
    let on_publish = Callback::new(move |_: ()| {
        let controller = controller.get_value();
        spawn_local(async move { controller.publish().await });
    });
    let on_logout = Callback::new(move |_: ()| controller.with_value(|c| c.logout()));
    let on_toggle_theme = Callback::new(move |_: ()| controller.with_value(|c| c.toggle_theme()));
    let on_toggle_side_by_side =
        Callback::new(move |_: ()| widget.with_value(|w| w.toggle_side_by_side()));

    // Placeholders always show; document previews only in a preview mode.
    let preview_hidden = move || {
        mode.get() == EditorMode::Edit
            && signals
                .preview
                .with(|pane| matches!(pane, PreviewPane::Idle | PreviewPane::Rendered(_)))
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1 class="app-title">"DocuHub"</h1>
                <span class="active-document">
                    {move || signals.active_path.get().unwrap_or_default()}
                </span>
                <ActionBar
                    save_enabled=signals.save_enabled
                    publish_enabled=signals.publish_enabled
                    dirty=signals.dirty
                    on_save=on_save
                    on_publish=on_publish
                    on_logout=on_logout
                />
                <ThemeSwitcher theme=signals.theme on_toggle=on_toggle_theme />
            </header>
            <StatusLine status=signals.status />
            <div class="workspace">
                <aside class="sidebar">
                    <FileTree
                        tree=signals.tree
                        active_path=signals.active_path
                        on_select=on_select
                    />
                </aside>
                <main
                    class="editor-area"
                    class:side-by-side-active=move || signals.side_by_side.get()
                >
                    <div class="editor-pane">
                        <MarkdownEditor widget=widget />
                    </div>
                    <div
                        id="preview"
                        class="preview markdown-body"
                        class:hidden=preview_hidden
                        inner_html=move || preview_html(&signals.preview.get())
                    ></div>
                </main>
            </div>
            <EditorShortcuts on_toggle_side_by_side=on_toggle_side_by_side on_save=on_save />
        </div>
    }
}
