//! Dark-mode toggle button.

use leptos::prelude::*;

use crate::storage::{prefs, BrowserStore};

/// Apply or remove the dark theme class on the document body.
pub fn apply_theme(dark: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let class_list = body.class_list();
    let result = if dark {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
    if let Err(err) = result {
        log::warn!("failed to update theme class: {err:?}");
    }
}

#[component]
pub fn ThemeToggle(dark: RwSignal<bool>) -> impl IntoView {
    let on_click = move |_| {
        let next = !dark.get_untracked();
        dark.set(next);
        prefs::save(&BrowserStore, next);
        apply_theme(next);
    };

    view! {
        <button class="theme-toggle" on:click=on_click>
            {move || if dark.get() { "Light mode" } else { "Dark mode" }}
        </button>
    }
}
