//! Saved prompt/answer history list.

use leptos::prelude::*;

use crate::storage::history::HistoryEntry;

#[component]
pub fn HistoryPanel(
    entries: Signal<Vec<HistoryEntry>>,
    #[prop(into)] on_select: Callback<HistoryEntry>,
    #[prop(into)] on_delete: Callback<usize>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="history-section">
            <div class="history-header">
                <h3 class="section-title">"History"</h3>
                <button class="action-btn" on:click=move |_| on_clear.run(())>
                    "Clear history"
                </button>
            </div>
            <HistoryList entries=entries on_select=on_select on_delete=on_delete />
        </div>
    }
}

#[component]
fn HistoryList(
    entries: Signal<Vec<HistoryEntry>>,
    #[prop(into)] on_select: Callback<HistoryEntry>,
    #[prop(into)] on_delete: Callback<usize>,
) -> impl IntoView {
    view! {
        <ul class="history-list">
            {move || {
                let entries_vec = entries.get();
                if entries_vec.is_empty() {
                    view! { <li class="history-empty">"History is empty."</li> }.into_any()
                } else {
                    entries_vec
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <HistoryItem
                                    index=index
                                    entry=entry
                                    on_select=on_select.clone()
                                    on_delete=on_delete.clone()
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </ul>
    }
}

#[component]
fn HistoryItem(
    index: usize,
    entry: HistoryEntry,
    #[prop(into)] on_select: Callback<HistoryEntry>,
    #[prop(into)] on_delete: Callback<usize>,
) -> impl IntoView {
    let entry_select = entry.clone();
    let full_prompt = entry.prompt.clone();

    view! {
        <li class="history-entry" on:click=move |_| on_select.run(entry_select.clone())>
            <div class="history-entry-index">{format!("#{}", index + 1)}</div>
            <div class="history-entry-prompt" title=full_prompt>
                {entry.prompt.clone()}
            </div>
            <div class="history-entry-answer">{entry.answer.clone()}</div>
            <button
                class="history-btn delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(index);
                }
                title="Delete from history"
            >
                "Delete"
            </button>
        </li>
    }
}
