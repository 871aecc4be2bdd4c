//! proforma-core: proposal studio core (field schema, token rendering,
//! date composition, form state, preview pipeline, and service clients).
//!
//! The UI add-on stays thin: every decision — which widget a field gets, how
//! a template token resolves, what the composed date looks like — lives here.

mod client;
mod config;
mod datetime;
mod error;
mod form;
mod persistence;
mod preview;
mod request;
pub mod schema;
mod tokens;

pub use client::{GenerateOutcome, StudioClient};
pub use config::StudioConfig;
pub use datetime::{compose_event_datetime, days_in_month};
pub use error::{ProformaError, ProformaResult};
pub use form::{FormStore, SEED_DEFAULTS};
pub use persistence::{load_snapshot, save_snapshot, SNAPSHOT_FILE};
pub use preview::{PreviewComposer, TEMPLATE_FETCH_FAILED};
pub use request::{build_generation_payload, FORMATTED_DATETIME_KEY};
pub use schema::{FieldKind, FieldSpec, Section, DATETIME_KEY, DATE_KEYS, SECTIONS};
pub use tokens::{render_tokens, widen_tabs};
