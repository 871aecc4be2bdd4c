//! Studio window: schema-driven form on the left, live preview on the right.
//!
//! Every widget reads its value from the [`FormStore`] and writes back only
//! on change, so the store's revision counter (and with it the preview
//! memoization) tracks real edits. The date/time picker edits the raw
//! sub-fields; the composed date is derived, never typed.

use crate::bridge::{EventReceiver, RequestSender, UiEvent, UiRequest};
use chrono::{Datelike, Local};
use proforma_core::{
    build_generation_payload, days_in_month, load_snapshot, save_snapshot, FieldKind, FormStore,
    PreviewComposer, StudioConfig, SECTIONS,
};
use tracing::warn;

pub struct StudioApp {
    store: FormStore,
    composer: PreviewComposer,
    config: StudioConfig,
    req_tx: RequestSender,
    event_rx: EventReceiver,
    template_loading: bool,
    generating: bool,
    status: String,
}

impl StudioApp {
    pub fn new(config: StudioConfig, req_tx: RequestSender, event_rx: EventReceiver) -> Self {
        let mut store = FormStore::new();
        seed_today(&mut store);

        // session template: fetched once at startup
        let _ = req_tx.try_send(UiRequest::FetchTemplate);

        Self {
            store,
            composer: PreviewComposer::default(),
            config,
            req_tx,
            event_rx,
            template_loading: true,
            generating: false,
            status: String::new(),
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                UiEvent::TemplateLoaded(text) => {
                    self.composer.set_template(text);
                    self.template_loading = false;
                }
                UiEvent::GenerateDone(result) => {
                    self.generating = false;
                    match result {
                        Ok(Some(url)) => {
                            self.status = "DOCX生成に成功しました".to_string();
                            if webbrowser::open(&url).is_err() {
                                self.status = format!("生成済み：{url}");
                            }
                        }
                        Ok(None) => {
                            self.status = "生成成功（outputフォルダを確認）".to_string();
                        }
                        Err(message) => {
                            warn!("generation failed: {message}");
                            self.status = "DOCX生成に失敗しました".to_string();
                        }
                    }
                }
            }
        }
    }

    fn date_picker(&mut self, ui: &mut egui::Ui) {
        ui.label("日時（自動で曜日計算）");
        let this_year = Local::now().year();
        let years: Vec<i32> = (this_year..this_year + 3).collect();

        ui.horizontal(|ui| {
            combo_number(ui, "year", &mut self.store, &years, "年");
            let months: Vec<i32> = (1..=12).collect();
            combo_number(ui, "month", &mut self.store, &months, "月");

            let y = self.store.get("year").parse::<i32>().unwrap_or(this_year);
            let m = self.store.get("month").parse::<u32>().unwrap_or(1);
            let days: Vec<i32> = (1..=days_in_month(y, m) as i32).collect();
            combo_number(ui, "day", &mut self.store, &days, "日");
        });
        ui.horizontal(|ui| {
            time_edit(ui, &mut self.store, "timeStart");
            ui.label("-");
            time_edit(ui, &mut self.store, "timeEnd");
        });
        ui.small("例：2025年9月22日（月） 15:00-19:00");
    }

    fn form_panel(&mut self, ui: &mut egui::Ui) {
        self.date_picker(ui);
        ui.add_space(8.0);

        for section in SECTIONS {
            ui.group(|ui| {
                ui.strong(section.title);
                for field in section.fields {
                    ui.add_space(4.0);
                    ui.label(field.label);
                    let mut value = self.store.get(field.key).to_string();
                    let changed = match field.kind {
                        FieldKind::Text => ui.text_edit_singleline(&mut value).changed(),
                        FieldKind::TextArea => ui
                            .add(egui::TextEdit::multiline(&mut value).desired_rows(4))
                            .changed(),
                        FieldKind::Number => {
                            let response = ui.text_edit_singleline(&mut value);
                            if response.changed() {
                                value.retain(|c| c.is_ascii_digit());
                            }
                            response.changed()
                        }
                        FieldKind::YesNo => yes_no_combo(ui, field.key, &mut value),
                    };
                    if changed {
                        self.store.set(field.key, value);
                    }
                }
            });
            ui.add_space(6.0);
        }
    }

    fn action_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("一時保存").clicked() {
                match save_snapshot(&self.config.snapshot_path(), &self.store.snapshot()) {
                    Ok(()) => self.status = "一時保存しました".to_string(),
                    Err(e) => {
                        warn!("snapshot save failed: {e}");
                        self.status = "保存に失敗しました".to_string();
                    }
                }
            }
            if ui.button("読み込み").clicked() {
                // missing or corrupt snapshot leaves the form untouched
                if let Some(snapshot) = load_snapshot(&self.config.snapshot_path()) {
                    self.store.restore_snapshot(snapshot);
                    self.status = "読み込みました".to_string();
                } else {
                    self.status = "保存データがありません".to_string();
                }
            }
            if ui.button("クリア").clicked() {
                self.store.reset();
                seed_today(&mut self.store);
                self.status.clear();
            }
            if ui
                .add_enabled(!self.generating, egui::Button::new("DOCX出力"))
                .clicked()
            {
                let payload = build_generation_payload(&self.store);
                if self.req_tx.try_send(UiRequest::Generate(payload)).is_ok() {
                    self.generating = true;
                    self.status = "生成中...".to_string();
                }
            }
        });
        if !self.status.is_empty() {
            ui.small(self.status.as_str());
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        if self.template_loading || self.generating {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        egui::SidePanel::left("form_panel")
            .default_width(430.0)
            .show(ctx, |ui| {
                ui.heading("入力");
                ui.separator();
                egui::ScrollArea::vertical()
                    .id_salt("form_scroll")
                    .show(ui, |ui| {
                        self.form_panel(ui);
                        self.action_row(ui);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("プレビュー（テンプレ全文）");
            ui.separator();
            if self.template_loading {
                ui.spinner();
            } else {
                let rendered = self.composer.compose(&self.store);
                egui::ScrollArea::vertical()
                    .id_salt("preview_scroll")
                    .show(ui, |ui| {
                        ui.label(rendered);
                    });
            }
        });
    }
}

/// Seed year/month/day with today when they are still empty (first frame
/// after creation or クリア).
fn seed_today(store: &mut FormStore) {
    let now = Local::now();
    if store.get("year").is_empty() {
        store.set("year", now.year().to_string());
    }
    if store.get("month").is_empty() {
        store.set("month", now.month().to_string());
    }
    if store.get("day").is_empty() {
        store.set("day", now.day().to_string());
    }
}

fn combo_number(
    ui: &mut egui::Ui,
    key: &str,
    store: &mut FormStore,
    options: &[i32],
    suffix: &str,
) {
    let mut current = store.get(key).to_string();
    let selected = format!("{current}{suffix}");
    egui::ComboBox::from_id_salt(key)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for option in options {
                let text = format!("{option}{suffix}");
                if ui
                    .selectable_value(&mut current, option.to_string(), text)
                    .clicked()
                {
                    store.set(key, current.clone());
                }
            }
        });
}

fn time_edit(ui: &mut egui::Ui, store: &mut FormStore, key: &str) {
    let mut value = store.get(key).to_string();
    let response = ui.add(egui::TextEdit::singleline(&mut value).desired_width(64.0));
    if response.changed() {
        store.set(key, value);
    }
}

fn yes_no_combo(ui: &mut egui::Ui, key: &str, value: &mut String) -> bool {
    let mut changed = false;
    let selected = if value.is_empty() {
        "選択してください"
    } else {
        value.as_str()
    };
    egui::ComboBox::from_id_salt(key)
        .selected_text(selected.to_string())
        .show_ui(ui, |ui| {
            for option in ["", "はい", "いいえ"] {
                let label = if option.is_empty() { "（未選択）" } else { option };
                if ui
                    .selectable_value(value, option.to_string(), label)
                    .clicked()
                {
                    changed = true;
                }
            }
        });
    changed
}
