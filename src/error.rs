//! Error taxonomy for the BookRec widget.
//!
//! Follows the teacher's `vibevoice/src/error.rs` idiom: a `thiserror` enum
//! with `From` impls for the foreign error types the code propagates with `?`.

use thiserror::Error;

/// Failures surfaced by the widget's controller.
#[derive(Error, Debug, Clone)]
pub enum WidgetError {
    /// Empty/whitespace input; shown inline, no network call.
    #[error("{0}")]
    Validation(String),

    /// Network failure, non-success status, or unparseable success body.
    #[error("{0}")]
    Transport(String),

    /// Clipboard write failure; surfaced only as a transient flash.
    #[error("Could not copy to clipboard.")]
    Clipboard,
}

impl From<gloo_net::Error> for WidgetError {
    fn from(e: gloo_net::Error) -> Self {
        WidgetError::Transport(e.to_string())
    }
}
