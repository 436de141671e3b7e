use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::query::QueryPhase;

#[component]
pub fn QueryForm(
    prompt: RwSignal<String>,
    phase: Signal<QueryPhase>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let textarea: web_sys::HtmlTextAreaElement = target.unchecked_into();
        prompt.set(textarea.value());
    };

    let on_form_submit = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    // Ctrl+Enter / Cmd+Enter submits from inside the textarea
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
                ev.prevent_default();
                on_submit.run(());
            }
        }
    };

    let button_text = move || {
        if phase.get().is_busy() {
            "Asking..."
        } else {
            "Ask"
        }
    };

    view! {
        <form class="query-form" on:submit=on_form_submit>
            <label for="prompt">"What are you in the mood to read?"</label>
            <textarea
                id="prompt"
                rows="3"
                placeholder="Describe a book, a mood, or a favorite author..."
                prop:value=move || prompt.get()
                on:input=on_input
                on:keydown=on_keydown
            />
            <div class="query-actions">
                <button
                    type="submit"
                    class="submit-button"
                    disabled=move || phase.get().is_busy()
                >
                    {button_text}
                </button>
                <Show when=move || phase.get().is_busy()>
                    <span class="loading-indicator">"Fetching recommendation..."</span>
                </Show>
            </div>
        </form>
    }
}
