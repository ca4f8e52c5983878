//! Reactive page state written by the controller.

use docuhub_core::{
    EditorController, EditorView, PreviewPane, StatusMessage, Theme, TreePane,
};
use leptos::prelude::*;

use crate::api::HttpDocumentApi;

/// The controller as used by the browser app.
pub type Controller = EditorController<HttpDocumentApi>;

/// Arena handle to the controller, `Copy` so it can be captured by views.
pub type ControllerHandle = StoredValue<Controller, LocalStorage>;

/// Signals backing every region the controller owns.
#[derive(Debug, Clone, Copy)]
pub struct EditorSignals {
    pub tree: RwSignal<TreePane>,
    pub preview: RwSignal<PreviewPane>,
    pub save_enabled: RwSignal<bool>,
    pub publish_enabled: RwSignal<bool>,
    pub status: RwSignal<Option<StatusMessage>>,
    pub theme: RwSignal<Theme>,
    pub side_by_side: RwSignal<bool>,
    pub active_path: RwSignal<Option<String>>,
    pub dirty: RwSignal<bool>,
}

impl EditorSignals {
    pub fn new() -> Self {
        Self {
            tree: RwSignal::new(TreePane::Loading),
            preview: RwSignal::new(PreviewPane::Placeholder),
            save_enabled: RwSignal::new(false),
            publish_enabled: RwSignal::new(true),
            status: RwSignal::new(None),
            theme: RwSignal::new(Theme::default()),
            side_by_side: RwSignal::new(false),
            active_path: RwSignal::new(None),
            dirty: RwSignal::new(false),
        }
    }
}

impl Default for EditorSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorView for EditorSignals {
    fn show_tree(&self, pane: TreePane) {
        self.tree.set(pane);
    }

    fn show_preview(&self, pane: PreviewPane) {
        self.preview.set(pane);
    }

    fn set_save_enabled(&self, enabled: bool) {
        self.save_enabled.set(enabled);
    }

    fn set_publish_enabled(&self, enabled: bool) {
        self.publish_enabled.set(enabled);
    }

    fn show_status(&self, status: Option<StatusMessage>) {
        self.status.set(status);
    }

    fn apply_theme(&self, theme: Theme) {
        match document().document_element() {
            Some(root) => {
                if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
                    log::warn!("failed to set data-theme={theme}: {err:?}");
                }
            }
            None => log::warn!("no document element to apply the {theme} theme to"),
        }
        self.theme.set(theme);
    }

    fn set_side_by_side(&self, active: bool) {
        self.side_by_side.set(active);
    }

    fn set_active_path(&self, path: Option<String>) {
        self.active_path.set(path);
    }

    fn set_dirty(&self, dirty: bool) {
        self.dirty.set(dirty);
    }
}

/// Markup shown in the preview pane for `pane`.
pub fn preview_html(pane: &PreviewPane) -> String {
    match pane {
        PreviewPane::Placeholder => {
            r#"<p class="preview-placeholder">Select a document to edit, or press F9 to toggle the side-by-side preview.</p>"#
                .to_string()
        }
        PreviewPane::Loading => {
            r#"<p class="preview-placeholder">Loading content...</p>"#.to_string()
        }
        PreviewPane::Idle => String::new(),
        PreviewPane::Rendered(html) => html.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_html_passes_rendered_markup() {
        let pane = PreviewPane::Rendered("<h1>Hi</h1>\n".to_string());
        assert_eq!(preview_html(&pane), "<h1>Hi</h1>\n");
    }

    #[test]
    fn test_preview_placeholders() {
        assert!(preview_html(&PreviewPane::Placeholder).contains("F9"));
        assert!(preview_html(&PreviewPane::Loading).contains("Loading"));
        assert!(preview_html(&PreviewPane::Idle).is_empty());
    }
}
