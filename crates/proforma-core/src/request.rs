//! Payload for the generation service.
//!
//! A faithful serialization of the current form: every stored key (raw date
//! sub-fields included, since templates may reference them individually)
//! plus `formatted_datetime`, the composed date string. Validation is the
//! generation service's job, not ours.

use crate::form::FormStore;
use crate::preview::PreviewComposer;
use serde_json::{Map, Value};

/// Key under which the composed date travels in the generation payload.
pub const FORMATTED_DATETIME_KEY: &str = "formatted_datetime";

/// Build the flat JSON object POSTed to the generation service.
pub fn build_generation_payload(store: &FormStore) -> Value {
    let mut object = Map::new();
    for (key, value) in store.snapshot() {
        object.insert(key, Value::String(value));
    }
    object.insert(
        FORMATTED_DATETIME_KEY.to_string(),
        Value::String(PreviewComposer::composed_datetime(store)),
    );
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_all_form_values_and_composed_date() {
        let mut store = FormStore::new();
        store.update([
            ("title", Some("清掃活動".to_string())),
            ("year", Some("2025".to_string())),
            ("month", Some("9".to_string())),
            ("day", Some("22".to_string())),
            ("timeStart", Some("15:00".to_string())),
            ("timeEnd", Some("19:00".to_string())),
        ]);
        let payload = build_generation_payload(&store);
        assert_eq!(payload["title"], "清掃活動");
        assert_eq!(payload["year"], "2025");
        assert_eq!(
            payload[FORMATTED_DATETIME_KEY],
            "2025年9月22日（月） 15:00-19:00"
        );
    }

    #[test]
    fn incomplete_date_serializes_as_empty_composed_string() {
        let store = FormStore::new();
        let payload = build_generation_payload(&store);
        assert_eq!(payload[FORMATTED_DATETIME_KEY], "");
        // raw sub-fields still travel
        assert_eq!(payload["timeStart"], "09:00");
    }
}
