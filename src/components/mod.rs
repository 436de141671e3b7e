pub mod history_panel;
pub mod output_panel;
pub mod query_form;
pub mod theme_toggle;
