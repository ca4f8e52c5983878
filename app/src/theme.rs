//! Light/dark theme switcher.

use docuhub_core::Theme;
use leptos::prelude::*;

/// Button showing the current theme icon; clicking it flips the theme.
#[component]
pub fn ThemeSwitcher(
    /// Current theme.
    theme: RwSignal<Theme>,
    /// Called on click.
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id="theme-switcher"
            class="theme-switcher"
            title=move || format!("Switch to {} theme", theme.get().toggled())
            on:click=move |_| on_toggle.run(())
        >
            {move || theme.get().icon()}
        </button>
    }
}
