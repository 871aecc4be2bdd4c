//! Placeholder substitution for template text.
//!
//! Templates contain `{{ key }}` and `{{ key || default }}` tokens. A token
//! resolves to the mapping value when that value is present and non-empty,
//! otherwise to the default expression, otherwise to the empty string.
//! Unknown keys are not an error. Substitution is a single pass over the
//! template, so a substituted value is never re-scanned for tokens.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z0-9_]+)\s*(?:\|\|\s*(.+?))?\s*\}\}").expect("token regex")
});

/// Replace every token in `template` using `mapping`. Pure and deterministic;
/// text without tokens passes through unchanged.
pub fn render_tokens(template: &str, mapping: &BTreeMap<String, String>) -> String {
    TOKEN_RE
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            match mapping.get(key) {
                Some(v) if !v.is_empty() => v.clone(),
                _ => caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
            }
        })
        .into_owned()
}

/// Display post-step applied after substitution: each literal tab becomes two
/// full-width spaces so table-extracted template text lines up in a
/// proportional layout. Not part of the token contract.
pub fn widen_tabs(text: &str) -> String {
    text.replace('\t', "　　")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_defined_value_verbatim() {
        let m = mapping(&[("title", "清掃活動")]);
        assert_eq!(render_tokens("事業名：{{title}}", &m), "事業名：清掃活動");
        assert_eq!(render_tokens("事業名：{{ title }}", &m), "事業名：清掃活動");
    }

    #[test]
    fn empty_value_falls_back_to_default() {
        let m = mapping(&[("club", "")]);
        assert_eq!(render_tokens("{{club || 未定}}", &m), "未定");
        assert_eq!(render_tokens("{{club}}", &m), "");
    }

    #[test]
    fn unknown_key_resolves_like_empty() {
        let m = mapping(&[]);
        assert_eq!(render_tokens("{{nope || D}}", &m), "D");
        assert_eq!(render_tokens("{{nope}}", &m), "");
    }

    #[test]
    fn default_may_contain_arbitrary_text() {
        let m = mapping(&[]);
        assert_eq!(
            render_tokens("{{x || 例：2025年9月22日}}", &m),
            "例：2025年9月22日"
        );
    }

    #[test]
    fn no_recursive_expansion() {
        let m = mapping(&[("k", "{{other}}"), ("other", "secret")]);
        assert_eq!(render_tokens("{{k}}", &m), "{{other}}");
    }

    #[test]
    fn tokenless_text_is_unchanged() {
        let m = mapping(&[("k", "v")]);
        assert_eq!(render_tokens("plain text", &m), "plain text");
    }

    #[test]
    fn multiple_tokens_in_one_line() {
        let m = mapping(&[("a", "1"), ("b", "2")]);
        assert_eq!(render_tokens("{{a}}/{{b}}/{{c||3}}", &m), "1/2/3");
    }

    #[test]
    fn widen_tabs_doubles_fullwidth_spaces() {
        assert_eq!(widen_tabs("a\tb"), "a　　b");
        assert_eq!(widen_tabs("no tabs"), "no tabs");
    }
}
