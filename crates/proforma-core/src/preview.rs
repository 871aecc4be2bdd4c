//! Live preview pipeline: form values → mapping → rendered template text.
//!
//! The composer holds the session's template text (fetched once at startup,
//! replaced only by an explicit re-fetch) and rebuilds the full rendered
//! preview from scratch on every change. The substitution mapping is a fresh
//! snapshot per render, so one render always sees one consistent view.

use crate::datetime::compose_event_datetime;
use crate::form::FormStore;
use crate::schema::DATETIME_KEY;
use crate::tokens::{render_tokens, widen_tabs};
use std::collections::BTreeMap;

/// Placeholder shown when the template service is unreachable or declines.
pub const TEMPLATE_FETCH_FAILED: &str = "（テンプレートの取得に失敗しました）";

/// Owns the session template text and the render cache.
#[derive(Debug, Default)]
pub struct PreviewComposer {
    template: String,
    cache: Option<(u64, String)>,
}

impl PreviewComposer {
    pub fn new(template: String) -> Self {
        Self {
            template,
            cache: None,
        }
    }

    /// Replace the session template (explicit re-fetch). Invalidates the cache.
    pub fn set_template(&mut self, template: String) {
        self.template = template;
        self.cache = None;
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// The composed date for the store's current date/time sub-fields.
    pub fn composed_datetime(store: &FormStore) -> String {
        compose_event_datetime(
            store.get("year"),
            store.get("month"),
            store.get("day"),
            store.get("timeStart"),
            store.get("timeEnd"),
        )
    }

    /// Substitution mapping for one render: the full form snapshot plus the
    /// synthesized `datetime` key. Rebuilt fresh every time; never stored.
    pub fn mapping(store: &FormStore) -> BTreeMap<String, String> {
        let mut mapping = store.snapshot();
        mapping.insert(DATETIME_KEY.to_string(), Self::composed_datetime(store));
        mapping
    }

    /// Full recomposition: render the template against the current mapping,
    /// then widen tabs for display. Memoized on the store revision, so calling
    /// this every frame only re-renders after an actual edit.
    pub fn compose(&mut self, store: &FormStore) -> String {
        if let Some((rev, text)) = &self.cache {
            if *rev == store.revision() {
                return text.clone();
            }
        }
        let rendered = widen_tabs(&render_tokens(&self.template, &Self::mapping(store)));
        self.cache = Some((store.revision(), rendered.clone()));
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_contains_form_values_and_synthesized_datetime() {
        let mut store = FormStore::new();
        store.update([
            ("title", Some("清掃活動".to_string())),
            ("year", Some("2025".to_string())),
            ("month", Some("9".to_string())),
            ("day", Some("22".to_string())),
            ("timeStart", Some("15:00".to_string())),
            ("timeEnd", Some("19:00".to_string())),
        ]);
        let mapping = PreviewComposer::mapping(&store);
        assert_eq!(mapping["title"], "清掃活動");
        assert_eq!(mapping[DATETIME_KEY], "2025年9月22日（月） 15:00-19:00");
    }

    #[test]
    fn datetime_tracks_date_edits() {
        let mut store = FormStore::new();
        store.update([
            ("year", Some("2025".to_string())),
            ("month", Some("2".to_string())),
            ("day", Some("30".to_string())),
        ]);
        assert_eq!(PreviewComposer::composed_datetime(&store), "");
        store.set("day", "28");
        assert_eq!(
            PreviewComposer::composed_datetime(&store),
            "2025年2月28日（金） 09:00-17:00"
        );
    }

    #[test]
    fn compose_renders_tokens_and_widens_tabs() {
        let mut composer =
            PreviewComposer::new("事業名\t{{title || 未記入}}\n日時\t{{datetime}}".to_string());
        let store = FormStore::new();
        assert_eq!(composer.compose(&store), "事業名　　未記入\n日時　　");
    }

    #[test]
    fn compose_is_memoized_until_the_store_changes() {
        let mut composer = PreviewComposer::new("{{title}}".to_string());
        let mut store = FormStore::new();
        store.set("title", "A");
        assert_eq!(composer.compose(&store), "A");
        assert_eq!(composer.compose(&store), "A");
        store.set("title", "B");
        assert_eq!(composer.compose(&store), "B");
    }

    #[test]
    fn set_template_invalidates_the_cache() {
        let mut composer = PreviewComposer::new("one".to_string());
        let store = FormStore::new();
        assert_eq!(composer.compose(&store), "one");
        composer.set_template("two".to_string());
        assert_eq!(composer.compose(&store), "two");
    }
}
