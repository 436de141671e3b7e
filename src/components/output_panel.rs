//! Output view with copy, save, and clear actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::error::WidgetError;

/// How long a transient button label stays up before reverting.
const FLASH_MS: u32 = 900;

/// Swap a button label for `message` and disable the control, reverting
/// after the flash delay.
fn flash(label: RwSignal<Option<&'static str>>, message: &'static str) {
    label.set(Some(message));
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(FLASH_MS).await;
        label.set(None);
    });
}

async fn write_clipboard(text: String) -> Result<(), WidgetError> {
    let window = web_sys::window().ok_or(WidgetError::Clipboard)?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(&text))
        .await
        .map(|_| ())
        .map_err(|_| WidgetError::Clipboard)
}

#[component]
pub fn OutputPanel(
    prompt: Signal<String>,
    output: Signal<String>,
    #[prop(into)] on_save: Callback<(String, String)>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let copy_label = RwSignal::new(None::<&'static str>);
    let save_label = RwSignal::new(None::<&'static str>);

    let on_copy_click = move |_| {
        let text = output.get_untracked();
        spawn_local(async move {
            match write_clipboard(text).await {
                Ok(()) => flash(copy_label, "Copied!"),
                Err(_) => flash(copy_label, "Copy failed"),
            }
        });
    };

    let on_save_click = move |_| {
        let saved_prompt = prompt.get_untracked().trim().to_string();
        let answer = output.get_untracked().trim().to_string();
        if saved_prompt.is_empty() || answer.is_empty() {
            flash(save_label, "Nothing to save");
            return;
        }
        on_save.run((saved_prompt, answer));
        flash(save_label, "Saved");
    };

    view! {
        <div class="output-section">
            <div class="output-header">
                <h3 class="section-title">"Recommendation"</h3>
                <div class="output-actions">
                    <button
                        class="action-btn"
                        on:click=on_copy_click
                        disabled=move || copy_label.get().is_some()
                    >
                        {move || copy_label.get().unwrap_or("Copy")}
                    </button>
                    <button
                        class="action-btn"
                        on:click=on_save_click
                        disabled=move || save_label.get().is_some()
                    >
                        {move || save_label.get().unwrap_or("Save")}
                    </button>
                    <button class="action-btn" on:click=move |_| on_clear.run(())>
                        "Clear"
                    </button>
                </div>
            </div>
            <div class="output-view">{move || output.get()}</div>
        </div>
    }
}
