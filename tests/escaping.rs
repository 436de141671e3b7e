#![cfg(target_arch = "wasm32")]

//! DOM-level check that markup stored in history entries renders inert.

use bookrec_web::components::history_panel::HistoryPanel;
use bookrec_web::storage::history::HistoryEntry;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn script_tags_in_history_render_as_text() {
    let document = web_sys::window().unwrap().document().unwrap();
    let host: web_sys::HtmlElement = document
        .create_element("div")
        .unwrap()
        .unchecked_into();
    document.body().unwrap().append_child(&host).unwrap();

    let entries = RwSignal::new(vec![HistoryEntry {
        prompt: "<script>alert('x')</script>".to_string(),
        answer: "a \"quoted\" & <i>marked up</i> answer".to_string(),
        timestamp: 1,
    }]);

    let handle = leptos::mount::mount_to(host.clone(), move || {
        view! {
            <HistoryPanel
                entries=entries.into()
                on_select=Callback::new(|_| {})
                on_delete=Callback::new(|_| {})
                on_clear=Callback::new(|_| {})
            />
        }
    });

    let markup = host.inner_html();
    assert!(markup.contains("&lt;script&gt;"));
    assert!(host.query_selector("script").unwrap().is_none());
    assert!(host.query_selector("i").unwrap().is_none());

    drop(handle);
}
