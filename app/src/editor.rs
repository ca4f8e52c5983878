//! Textarea-backed Markdown editor widget.
//!
//! [`TextareaWidget`] is the [`EditorWidget`] the controller drives;
//! [`MarkdownEditor`] renders its toolbar and textarea.

use std::{cell::RefCell, rc::Rc};

use docuhub_core::{EditorMode, EditorWidget, UndoHistory};
use leptos::{html, prelude::*};

use crate::format::{FormatAction, apply_format};

/// Editor state shared between the component and the controller.
pub struct TextareaWidget {
    node: NodeRef<html::Textarea>,
    text: RwSignal<String>,
    mode: RwSignal<EditorMode>,
    can_undo: RwSignal<bool>,
    can_redo: RwSignal<bool>,
    history: RefCell<UndoHistory>,
    change_listeners: RefCell<Vec<Box<dyn Fn()>>>,
    mode_listeners: RefCell<Vec<Box<dyn Fn(EditorMode)>>>,
}

impl TextareaWidget {
    pub fn new() -> Self {
        Self {
            node: NodeRef::new(),
            text: RwSignal::new(String::new()),
            mode: RwSignal::new(EditorMode::Edit),
            can_undo: RwSignal::new(false),
            can_redo: RwSignal::new(false),
            history: RefCell::new(UndoHistory::new()),
            change_listeners: RefCell::new(Vec::new()),
            mode_listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn node_ref(&self) -> NodeRef<html::Textarea> {
        self.node
    }

    pub fn text(&self) -> RwSignal<String> {
        self.text
    }

    pub fn mode_signal(&self) -> RwSignal<EditorMode> {
        self.mode
    }

    /// `(can_undo, can_redo)` signals for the toolbar.
    pub fn history_signals(&self) -> (RwSignal<bool>, RwSignal<bool>) {
        (self.can_undo, self.can_redo)
    }

    fn sync_history(&self) {
        let (undo, redo) = {
            let history = self.history.borrow();
            (history.can_undo(), history.can_redo())
        };
        self.can_undo.set(undo);
        self.can_redo.set(redo);
    }

    fn notify_change(&self) {
        for listener in self.change_listeners.borrow().iter() {
            listener();
        }
    }

    /// Record a user edit coming from the textarea.
    pub fn handle_input(&self, value: String) {
        let previous = self.text.get_untracked();
        if previous == value {
            return;
        }
        self.history.borrow_mut().record(previous);
        self.sync_history();
        self.text.set(value);
        self.notify_change();
    }

    /// Run a toolbar transform over the current selection.
    pub fn apply(&self, action: FormatAction) {
        let Some(textarea) = self.node.get_untracked() else {
            return;
        };
        let current = self.text.get_untracked();
        let start = textarea.selection_start().ok().flatten().unwrap_or(0);
        let end = textarea.selection_end().ok().flatten().unwrap_or(start);
        let edit = apply_format(action, &current, start, end);

        self.history.borrow_mut().record(current);
        self.sync_history();
        textarea.set_value(&edit.text);
        let _ = textarea.set_selection_range(edit.selection_start, edit.selection_end);
        let _ = textarea.focus();
        self.text.set(edit.text);
        self.notify_change();
    }

    pub fn undo(&self) {
        let current = self.text.get_untracked();
        let previous = self.history.borrow_mut().undo(&current);
        self.sync_history();
        if let Some(previous) = previous {
            self.text.set(previous);
            self.notify_change();
        }
    }

    pub fn redo(&self) {
        let current = self.text.get_untracked();
        let next = self.history.borrow_mut().redo(&current);
        self.sync_history();
        if let Some(next) = next {
            self.text.set(next);
            self.notify_change();
        }
    }

    /// Switch layout mode, notifying listeners on an actual transition.
    pub fn set_mode(&self, mode: EditorMode) {
        if self.mode.get_untracked() == mode {
            return;
        }
        self.mode.set(mode);
        for listener in self.mode_listeners.borrow().iter() {
            listener(mode);
        }
    }

    pub fn toggle_side_by_side(&self) {
        let next = match self.mode.get_untracked() {
            EditorMode::SideBySide => EditorMode::Edit,
            _ => EditorMode::SideBySide,
        };
        self.set_mode(next);
    }

    pub fn toggle_preview(&self) {
        let next = match self.mode.get_untracked() {
            EditorMode::Preview => EditorMode::Edit,
            _ => EditorMode::Preview,
        };
        self.set_mode(next);
    }
}

impl Default for TextareaWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorWidget for TextareaWidget {
    fn value(&self) -> String {
        self.text.get_untracked()
    }

    fn set_value(&self, text: &str) {
        self.text.set(text.to_string());
    }

    fn clear_history(&self) {
        self.history.borrow_mut().clear();
        self.sync_history();
    }

    fn focus(&self) {
        if let Some(textarea) = self.node.get_untracked() {
            let _ = textarea.focus();
        }
    }

    fn mode(&self) -> EditorMode {
        self.mode.get_untracked()
    }

    fn on_change(&self, callback: Box<dyn Fn()>) {
        self.change_listeners.borrow_mut().push(callback);
    }

    fn on_mode_change(&self, callback: Box<dyn Fn(EditorMode)>) {
        self.mode_listeners.borrow_mut().push(callback);
    }
}

/// Handle to the widget that view closures can capture.
pub type WidgetHandle = StoredValue<Rc<TextareaWidget>, LocalStorage>;

/// Toolbar plus textarea.
#[component]
pub fn MarkdownEditor(
    /// The widget backing this editor.
    widget: WidgetHandle,
) -> impl IntoView {
    let node = widget.with_value(|w| w.node_ref());
    let text = widget.with_value(|w| w.text());
    let mode = widget.with_value(|w| w.mode_signal());
    let (can_undo, can_redo) = widget.with_value(|w| w.history_signals());

    let format_buttons = FormatAction::ALL
        .into_iter()
        .map(|action| {
            view! {
                <button
                    type="button"
                    class="toolbar-button"
                    title=action.title()
                    on:click=move |_| widget.with_value(|w| w.apply(action))
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="editor-toolbar" role="toolbar">
            {format_buttons}
            <span class="toolbar-separator"></span>
            <button
                type="button"
                class="toolbar-button"
                title="Undo"
                prop:disabled=move || !can_undo.get()
                on:click=move |_| widget.with_value(|w| w.undo())
            >
                "↶"
            </button>
            <button
                type="button"
                class="toolbar-button"
                title="Redo"
                prop:disabled=move || !can_redo.get()
                on:click=move |_| widget.with_value(|w| w.redo())
            >
                "↷"
            </button>
            <span class="toolbar-separator"></span>
            <button
                type="button"
                class="toolbar-button"
                class:active=move || mode.get() == EditorMode::Preview
                title="Toggle preview"
                on:click=move |_| widget.with_value(|w| w.toggle_preview())
            >
                "👁"
            </button>
            <button
                type="button"
                class="toolbar-button"
                class:active=move || mode.get() == EditorMode::SideBySide
                title="Toggle side by side (F9)"
                on:click=move |_| widget.with_value(|w| w.toggle_side_by_side())
            >
                "◫"
            </button>
        </div>
        <textarea
            id="editor"
            class="markdown-input"
            class:hidden=move || mode.get() == EditorMode::Preview
            spellcheck="false"
            node_ref=node
            prop:value=move || text.get()
            on:input=move |ev| {
                let value = event_target_value(&ev);
                widget.with_value(|w| w.handle_input(value));
            }
        ></textarea>
    }
}
