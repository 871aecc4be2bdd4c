//! Async bridge between the egui thread and the HTTP worker.
//!
//! The UI thread never blocks: it sends [`UiRequest`]s over a bounded tokio
//! channel and drains [`UiEvent`]s with `try_recv` each frame. The worker
//! thread owns the [`StudioClient`] and a current-thread runtime.

use proforma_core::{StudioClient, StudioConfig};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::info;

/// Requests the UI can issue. No cancellation; a request runs to completion
/// or failure and the user may press the button again.
#[derive(Debug)]
pub enum UiRequest {
    /// Fetch (or re-fetch) the session template text.
    FetchTemplate,
    /// Submit the generation payload to the generation service.
    Generate(Value),
}

/// Completion events delivered back to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    /// Template text (or the fixed placeholder on failure).
    TemplateLoaded(String),
    /// Generation finished: `Ok(Some(url))` to open, `Ok(None)` for success
    /// without a download link, `Err(message)` for the single failure notice.
    GenerateDone(Result<Option<String>, String>),
}

/// Sender half used by the app.
pub type RequestSender = mpsc::Sender<UiRequest>;

/// Receiver half polled by the app each frame.
pub type EventReceiver = mpsc::Receiver<UiEvent>;

/// Spawn the worker thread and return the UI's channel ends.
pub fn spawn_worker(config: StudioConfig) -> (RequestSender, EventReceiver) {
    let (req_tx, mut req_rx) = mpsc::channel::<UiRequest>(16);
    let (event_tx, event_rx) = mpsc::channel::<UiEvent>(16);

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        rt.block_on(async move {
            let client = StudioClient::new(&config);
            while let Some(req) = req_rx.recv().await {
                match req {
                    UiRequest::FetchTemplate => {
                        let text = client.fetch_template().await;
                        let _ = event_tx.send(UiEvent::TemplateLoaded(text)).await;
                    }
                    UiRequest::Generate(payload) => {
                        info!("submitting generation request");
                        let event = match client.generate(&payload).await {
                            Ok(outcome) => UiEvent::GenerateDone(Ok(outcome.download_url)),
                            Err(e) => UiEvent::GenerateDone(Err(e.to_string())),
                        };
                        let _ = event_tx.send(event).await;
                    }
                }
            }
        });
    });

    (req_tx, event_rx)
}
