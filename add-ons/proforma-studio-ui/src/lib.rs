//! Proposal studio desktop UI.
//!
//! Thin shell over `proforma-core`: the schema drives the form, the preview
//! composer drives the right-hand pane, and all HTTP work happens on the
//! bridge worker thread so the egui loop never blocks.

mod app;
mod bridge;

pub use app::StudioApp;
pub use bridge::{spawn_worker, EventReceiver, RequestSender, UiEvent, UiRequest};
