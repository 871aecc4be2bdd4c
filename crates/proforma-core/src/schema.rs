//! Declarative field schema for the proposal form.
//!
//! One static table drives everything: form rendering order, the input
//! widget chosen per field, and key enumeration for reset and persistence.
//! The table is process-wide constant data and is never mutated.

/// Input affordance of a form field. Storage is always a string; the kind
/// only constrains what the widget accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    TextArea,
    /// Digits-only single line.
    Number,
    /// はい / いいえ selector.
    YesNo,
}

/// One form field: stable key (token name in templates), display label, kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// Ordered group of fields with a section heading.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { key, label, kind }
}

/// The full proposal form, in display order. The event date/time is not a
/// schema field; it is edited through the dedicated picker and injected into
/// the render mapping as the synthesized `datetime` key.
pub static SECTIONS: &[Section] = &[
    Section {
        title: "基本情報",
        fields: &[
            field("title", "事業名", FieldKind::Text),
            field("club", "実施クラブ", FieldKind::Text),
            field("dept", "実施部署", FieldKind::Text),
            field("category", "活動カテゴリ", FieldKind::Text),
            field("field", "活動分野", FieldKind::Text),
            field("place", "活動場所", FieldKind::Text),
            field("expected_ivusa", "想定人数（IVUSA）", FieldKind::Number),
            field("expected_other", "想定人数（他）", FieldKind::Number),
            field("owner", "事業責任者", FieldKind::Text),
            field("other_club", "他クラブ参加", FieldKind::Text),
            field("beneficiary", "受益者", FieldKind::Text),
            field("is_new", "新規事業かどうか", FieldKind::YesNo),
            field("activity_kind", "活動内容の種類", FieldKind::Text),
            field("duration", "活動期間", FieldKind::Text),
        ],
    },
    Section {
        title: "目的・要件・内容",
        fields: &[
            field("skills", "活動で必要とされるもの（得られるもの）", FieldKind::TextArea),
            field("purpose", "目的", FieldKind::TextArea),
            field("kpi", "達成要件", FieldKind::TextArea),
            field("details", "内容", FieldKind::TextArea),
        ],
    },
    Section {
        title: "スケジュール",
        fields: &[
            field("pre_schedule", "事業実施までのスケジュール", FieldKind::TextArea),
            field("exec_schedule", "計画実行のためのスケジュール", FieldKind::TextArea),
            field("day_schedule", "当日の作戦計画（スケジュール）", FieldKind::TextArea),
        ],
    },
    Section {
        title: "リスク・関係機関",
        fields: &[
            field("risk_before", "事前のリスクヘッジ", FieldKind::TextArea),
            field("risk_during", "事中のリスクヘッジ", FieldKind::TextArea),
            field("stakeholders", "関係機関・カウンターパート等", FieldKind::TextArea),
            field("permit_city", "役所への申請など", FieldKind::Text),
            field("permit_fire", "消防署への申請など", FieldKind::Text),
            field("permit_police", "警察への申請など", FieldKind::Text),
            field("other_notes", "その他（備考）", FieldKind::TextArea),
        ],
    },
    Section {
        title: "予算・資金",
        fields: &[
            field("budget_total", "予算総額（円）", FieldKind::Number),
            field("funding", "資金調達方法", FieldKind::TextArea),
            field("budget_usage", "予算用途", FieldKind::TextArea),
        ],
    },
    Section {
        title: "各種フラグ",
        fields: &[
            field("press", "プレスリリース", FieldKind::YesNo),
            field("drive_student", "学生運転", FieldKind::YesNo),
            field("rentacar", "レンタカー利用", FieldKind::YesNo),
            field("general_join", "一般参加", FieldKind::YesNo),
            field("knife", "刃物使用", FieldKind::YesNo),
            field("power_tool", "動力機材使用", FieldKind::YesNo),
            field("self_cook", "自炊", FieldKind::YesNo),
            field("stay", "宿泊利用", FieldKind::YesNo),
        ],
    },
    Section {
        title: "緊急連絡体制",
        fields: &[
            field("emg_clubman", "緊急連絡先：クラマネ", FieldKind::Text),
            field("emg_officer", "緊急連絡先：担当役員", FieldKind::Text),
            field("emg_day", "緊急連絡先：当日責任者", FieldKind::Text),
            field("emg_ok", "緊急連絡体制は明確？", FieldKind::YesNo),
        ],
    },
];

/// Raw date/time sub-fields edited by the picker rather than the schema
/// sections. They live in the form store like any other key.
pub const DATE_KEYS: &[&str] = &["year", "month", "day", "timeStart", "timeEnd"];

/// Synthesized key carrying the composed date string. Injected at
/// mapping-build time only; never stored or persisted as an editable field.
pub const DATETIME_KEY: &str = "datetime";

/// Every key the form store owns: date/time sub-fields first, then all
/// schema fields in section order.
pub fn all_keys() -> impl Iterator<Item = &'static str> {
    DATE_KEYS
        .iter()
        .copied()
        .chain(SECTIONS.iter().flat_map(|s| s.fields.iter().map(|f| f.key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = BTreeSet::new();
        for key in all_keys() {
            assert!(seen.insert(key), "duplicate field key: {key}");
        }
    }

    #[test]
    fn datetime_is_not_a_stored_key() {
        assert!(all_keys().all(|k| k != DATETIME_KEY));
    }

    #[test]
    fn keys_are_valid_token_names() {
        for key in all_keys() {
            assert!(
                key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "key not token-safe: {key}"
            );
        }
    }
}
