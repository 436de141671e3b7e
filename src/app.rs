use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::client::fetch_recommendation;
use crate::components::history_panel::HistoryPanel;
use crate::components::output_panel::OutputPanel;
use crate::components::query_form::QueryForm;
use crate::components::theme_toggle::{apply_theme, ThemeToggle};
use crate::query::{normalize_prompt, QueryPhase};
use crate::storage::history::HistoryEntry;
use crate::storage::{self, history, prefs, BrowserStore};

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn App() -> impl IntoView {
    // Load persisted state before the first render
    let initial_dark = prefs::load(&BrowserStore);
    if initial_dark {
        apply_theme(true);
    }

    // State signals
    let dark = RwSignal::new(initial_dark);
    let prompt = RwSignal::new(String::new());
    let output = RwSignal::new(String::new());
    let phase = RwSignal::new(QueryPhase::Idle);
    let error_message = RwSignal::new(None::<String>);
    let entries = RwSignal::new(history::load(&BrowserStore));

    let on_submit = Callback::new(move |_: ()| {
        error_message.set(None);
        let user_input = match normalize_prompt(&prompt.get_untracked()) {
            Ok(input) => input,
            Err(err) => {
                error_message.set(Some(err.to_string()));
                return;
            }
        };

        phase.set(QueryPhase::Submitting);
        output.set(String::new());

        spawn_local(async move {
            match fetch_recommendation(&user_input).await {
                Ok(answer) => {
                    output.set(answer.clone());
                    let entry = HistoryEntry {
                        prompt: user_input,
                        answer,
                        timestamp: storage::now_millis(),
                    };
                    entries.update(|h| {
                        history::push(h, entry);
                        history::save(&BrowserStore, h);
                    });
                    phase.set(QueryPhase::Success);
                }
                Err(err) => {
                    log::error!("recommendation request failed: {err}");
                    error_message.set(Some(err.to_string()));
                    phase.set(QueryPhase::Failed);
                }
            }
        });
    });

    let on_clear = Callback::new(move |_: ()| {
        prompt.set(String::new());
        output.set(String::new());
        error_message.set(None);
    });

    let on_save = Callback::new(move |(saved_prompt, answer): (String, String)| {
        let entry = HistoryEntry {
            prompt: saved_prompt,
            answer,
            timestamp: storage::now_millis(),
        };
        entries.update(|h| {
            history::push(h, entry);
            history::save(&BrowserStore, h);
        });
    });

    let on_select = Callback::new(move |entry: HistoryEntry| {
        prompt.set(entry.prompt);
        output.set(entry.answer);
        scroll_to_top();
    });

    let on_delete = Callback::new(move |index: usize| {
        entries.update(|h| {
            if index < h.len() {
                h.remove(index);
            }
            history::save(&BrowserStore, h);
        });
    });

    let on_clear_history = Callback::new(move |_: ()| {
        history::clear(&BrowserStore);
        entries.set(Vec::new());
    });

    view! {
        <div class="app-container">
            <header class="app-header">
                <div>
                    <h1 class="app-title">"BookRec"</h1>
                    <p class="tagline">"Book Recommendations"</p>
                </div>
                <ThemeToggle dark=dark />
            </header>

            <main class="main-content">
                <div class="panel input-panel">
                    <QueryForm prompt=prompt phase=phase.into() on_submit=on_submit />
                    {move || error_message.get().map(|msg| view! {
                        <div class="error-box">{msg}</div>
                    })}
                </div>

                <div class="panel output-panel">
                    <OutputPanel
                        prompt=prompt.into()
                        output=output.into()
                        on_save=on_save
                        on_clear=on_clear
                    />
                </div>

                <aside class="panel history-panel">
                    <HistoryPanel
                        entries=entries.into()
                        on_select=on_select
                        on_delete=on_delete
                        on_clear=on_clear_history
                    />
                </aside>
            </main>

            <footer class="app-footer">
                <p>{format!("BookRec © {}", current_year())}</p>
            </footer>
        </div>
    }
}
