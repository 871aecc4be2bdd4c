//! proforma-studio-ui: fill the proposal form, watch the document preview
//! update live, and submit it to the generation server.
//!
//! Run with: cargo run -p proforma-studio-ui
//! Server base URL via PROFORMA_SERVER_URL (default http://127.0.0.1:5000).

use eframe::egui;
use proforma_core::StudioConfig;
use proforma_studio_ui::{spawn_worker, StudioApp};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let config = StudioConfig::from_env();
    let (req_tx, event_rx) = spawn_worker(config.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1020.0, 720.0])
            .with_title("企画書エディタ"),
        ..Default::default()
    };

    eframe::run_native(
        "Proposal Studio",
        options,
        Box::new(move |_cc| Ok(Box::new(StudioApp::new(config, req_tx, event_rx)))),
    )
}
