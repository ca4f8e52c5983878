//! Capability traits for everything the controller drives in the page.

use crate::{model::Theme, status::StatusMessage, tree::TreeItem};

/// Editor layout mode reported by the edit widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    /// Raw Markdown only.
    #[default]
    Edit,
    /// Rendered preview only.
    Preview,
    /// Raw Markdown and rendered preview next to each other.
    SideBySide,
}

impl EditorMode {
    /// Whether the preview pane is visible in this mode.
    pub fn shows_preview(self) -> bool {
        matches!(self, EditorMode::Preview | EditorMode::SideBySide)
    }
}

/// Content of the file tree pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TreePane {
    #[default]
    Loading,
    /// No documents to show.
    Empty,
    /// Inline error text.
    Error(String),
    Ready(Vec<TreeItem>),
}

/// Content of the preview pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreviewPane {
    /// Nothing selected yet.
    #[default]
    Placeholder,
    Loading,
    /// A document is loaded but no preview mode is active.
    Idle,
    /// Rendered HTML.
    Rendered(String),
}

/// The page regions owned by the controller.
pub trait EditorView {
    fn show_tree(&self, pane: TreePane);
    fn show_preview(&self, pane: PreviewPane);
    fn set_save_enabled(&self, enabled: bool);
    fn set_publish_enabled(&self, enabled: bool);
    /// `None` clears the status line.
    fn show_status(&self, status: Option<StatusMessage>);
    /// Set the document-level theme attribute and the switcher icon.
    fn apply_theme(&self, theme: Theme);
    /// Reflect side-by-side layout on the editor wrapper.
    fn set_side_by_side(&self, active: bool);
    /// Highlight the tree leaf of the active document.
    fn set_active_path(&self, path: Option<String>);
    fn set_dirty(&self, dirty: bool);
}

/// Whole-page navigation.
pub trait Navigator {
    fn redirect(&self, route: &str);
}

/// The Markdown edit widget.
///
/// Any widget used with the controller must report mode transitions through
/// [`EditorWidget::on_mode_change`]; the controller never inspects widget
/// internals to detect them. [`EditorWidget::set_value`] must not fire change
/// callbacks.
pub trait EditorWidget {
    fn value(&self) -> String;
    fn set_value(&self, text: &str);
    fn clear_history(&self);
    fn focus(&self);
    fn mode(&self) -> EditorMode;
    /// Register a callback fired after every user edit.
    fn on_change(&self, callback: Box<dyn Fn()>);
    /// Register a callback fired after every layout mode transition.
    fn on_mode_change(&self, callback: Box<dyn Fn(EditorMode)>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_modes() {
        assert!(!EditorMode::Edit.shows_preview());
        assert!(EditorMode::Preview.shows_preview());
        assert!(EditorMode::SideBySide.shows_preview());
    }
}
