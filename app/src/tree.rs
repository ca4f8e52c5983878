//! File tree pane.

use docuhub_core::{TreeItem, TreePane};
use leptos::prelude::*;

/// Text shown in the tree pane when it has no items to render.
pub fn tree_message(pane: &TreePane) -> Option<String> {
    match pane {
        TreePane::Loading => Some("Loading files...".to_string()),
        TreePane::Empty => Some("No documents found.".to_string()),
        TreePane::Error(reason) => Some(format!("Error loading file tree: {reason}")),
        TreePane::Ready(_) => None,
    }
}

fn render_item(
    item: TreeItem,
    active_path: RwSignal<Option<String>>,
    on_select: Callback<String>,
) -> AnyView {
    match item {
        TreeItem::Directory {
            label,
            path,
            children,
        } => {
            let expanded = RwSignal::new(true);
            let nested = (!children.is_empty()).then(|| {
                let children = children
                    .into_iter()
                    .map(|child| render_item(child, active_path, on_select))
                    .collect_view();
                view! {
                    <ul class="tree-children" class:collapsed=move || !expanded.get()>
                        {children}
                    </ul>
                }
            });

            view! {
                <li class="directory" data-path=path>
                    <span
                        class="directory-label"
                        class:collapsed=move || !expanded.get()
                        on:click=move |_| expanded.update(|open| *open = !*open)
                    >
                        {label}
                    </span>
                    {nested}
                </li>
            }
            .into_any()
        }
        TreeItem::File { label, path } => {
            let is_active = {
                let path = path.clone();
                move || active_path.get().as_deref() == Some(path.as_str())
            };
            let target = path.clone();

            view! {
                <li class="file" class:active=is_active>
                    <a
                        href="#"
                        data-path=path
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_select.run(target.clone());
                        }
                    >
                        {label}
                    </a>
                </li>
            }
            .into_any()
        }
    }
}

/// The document tree with the active leaf highlighted.
#[component]
pub fn FileTree(
    /// Tree pane state.
    tree: RwSignal<TreePane>,
    /// Path of the active document.
    active_path: RwSignal<Option<String>>,
    /// Called with the path of a clicked leaf.
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <nav id="file-tree" class="file-tree">
            {move || {
                let pane = tree.get();
                match tree_message(&pane) {
                    Some(message) => {
                        let is_error = matches!(pane, TreePane::Error(_));
                        view! { <p class="tree-message" class:error=is_error>{message}</p> }
                            .into_any()
                    }
                    None => {
                        let TreePane::Ready(items) = pane else {
                            return ().into_any();
                        };
                        let items = items
                            .into_iter()
                            .map(|item| render_item(item, active_path, on_select))
                            .collect_view();
                        view! { <ul class="tree-root">{items}</ul> }.into_any()
                    }
                }
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_messages() {
        assert_eq!(
            tree_message(&TreePane::Empty).as_deref(),
            Some("No documents found.")
        );
        assert_eq!(
            tree_message(&TreePane::Error("HTTP error! status: 500 - boom".into())).as_deref(),
            Some("Error loading file tree: HTTP error! status: 500 - boom")
        );
        assert!(tree_message(&TreePane::Ready(Vec::new())).is_none());
    }
}
