//! Header actions: save, publish, logout and the status line.

use docuhub_core::StatusMessage;
use leptos::prelude::*;

const APP_NAME: &str = "DocuHub";

/// Browser title for the active document.
pub fn document_title(active_path: Option<&str>, dirty: bool) -> String {
    match active_path {
        Some(path) if dirty => format!("* {path} - {APP_NAME}"),
        Some(path) => format!("{path} - {APP_NAME}"),
        None => APP_NAME.to_string(),
    }
}

/// Save and publish triggers plus logout.
#[component]
pub fn ActionBar(
    save_enabled: RwSignal<bool>,
    publish_enabled: RwSignal<bool>,
    dirty: RwSignal<bool>,
    on_save: Callback<()>,
    on_publish: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="actions">
            <button
                type="button"
                id="save-button"
                class="action-button"
                class:dirty=move || dirty.get()
                title="Save (Ctrl+S)"
                prop:disabled=move || !save_enabled.get()
                on:click=move |_| on_save.run(())
            >
                "Save"
            </button>
            <button
                type="button"
                id="publish-button"
                class="action-button"
                prop:disabled=move || !publish_enabled.get()
                on:click=move |_| on_publish.run(())
            >
                "Publish"
            </button>
            <button
                type="button"
                id="logout-button"
                class="action-button secondary"
                on:click=move |_| on_logout.run(())
            >
                "Log out"
            </button>
        </div>
    }
}

/// The transient status line.
#[component]
pub fn StatusLine(status: RwSignal<Option<StatusMessage>>) -> impl IntoView {
    view! {
        <div id="status" class="status" role="status" aria-live="polite">
            {move || {
                status
                    .get()
                    .map(|message| {
                        view! { <span class=message.kind.css_class()>{message.text}</span> }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        assert_eq!(document_title(None, false), "DocuHub");
        assert_eq!(document_title(Some("guide.md"), false), "guide.md - DocuHub");
        assert_eq!(document_title(Some("guide.md"), true), "* guide.md - DocuHub");
    }
}
