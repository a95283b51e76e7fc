use std::time::Duration;

use eframe::egui::{
    self,
    RichText,
};

use super::{
    browser::CardState,
    clipboard::ClipboardSink,
    theme::Theme,
    toast::Toast,
};
use crate::core::{
    models::{
        Library,
        PromptRecord,
    },
    template::{
        self,
        SpanKind,
    },
};

const COPY_REVERT: Duration = Duration::from_secs(2);

/// The one cross-card effect a card can produce; handled by the caller so
/// cards never reach into shared filter state themselves.
pub enum CardAction {
    FilterFramework(String),
}

pub fn prompt_card(
    ui: &mut egui::Ui,
    record: &PromptRecord,
    library: &Library,
    theme: &Theme,
    state: &mut CardState,
    clipboard: &mut dyn ClipboardSink,
    toast: &mut Toast,
) -> Option<CardAction> {
    let mut action = None;

    egui::Frame::group(ui.style())
        .fill(theme.background)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            card_header(ui, record, library, theme, state, clipboard, toast);

            ui.label(RichText::new(&record.title).strong().size(16.0));
            ui.add_space(4.0);

            if let Some(framework_id) = framework_badges(ui, record, library, theme) {
                action = Some(CardAction::FilterFramework(framework_id));
            }

            prompt_text(ui, record, theme, state);
            variable_fields(ui, record, theme, state);

            ui.add_space(6.0);
            ui.label(theme.heading("💡 Why it works"));
            ui.label(RichText::new(&record.why_it_works).color(theme.comment));

            ui.add_space(6.0);
            platform_tags(ui, record, library, theme);
            platform_notes(ui, record, library, theme, state);
        });

    action
}

fn card_header(
    ui: &mut egui::Ui,
    record: &PromptRecord,
    library: &Library,
    theme: &Theme,
    state: &mut CardState,
    clipboard: &mut dyn ClipboardSink,
    toast: &mut Toast,
) {
    ui.horizontal(|ui| {
        let category_label = match library.category(&record.category) {
            Some(category) => format!("{} {}", category.icon, category.name),
            None => record.category.clone(),
        };
        ui.label(theme.heading(&category_label));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let copied = state.copied.is_running();
            let copy_text = if copied {
                RichText::new("✔ Copied").color(theme.green)
            } else {
                RichText::new("📋 Copy")
            };
            if ui.button(copy_text).on_hover_text("Copy prompt to clipboard").clicked() {
                copy_prompt(record, state, clipboard, toast);
            }

            if let Some(difficulty) = record.difficulty {
                let color = match difficulty {
                    crate::core::Difficulty::Beginner => theme.green,
                    crate::core::Difficulty::Intermediate => theme.orange,
                    crate::core::Difficulty::Advanced => theme.red,
                };
                ui.label(RichText::new(format!("● {}", difficulty.label())).color(color).small());
            }
        });
    });
}

fn copy_prompt(
    record: &PromptRecord,
    state: &mut CardState,
    clipboard: &mut dyn ClipboardSink,
    toast: &mut Toast,
) {
    let text = template::substitute(&record.prompt, &state.bindings);
    match clipboard.copy(&text) {
        Ok(()) => {
            // Overlapping clicks re-arm the revert; last write wins.
            state.copied.arm(COPY_REVERT);
            toast.notify("Copied to clipboard!");
        }
        Err(e) => {
            log::warn!("Clipboard write failed for '{}': {}", record.id, e);
            toast.notify("Failed to copy");
        }
    }
}

fn framework_badges(
    ui: &mut egui::Ui,
    record: &PromptRecord,
    library: &Library,
    theme: &Theme,
) -> Option<String> {
    if record.frameworks.is_empty() {
        return None;
    }

    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for framework_id in &record.frameworks {
            let (label, hover) = match library.framework(framework_id) {
                Some(fw) => (fw.short_label.clone(), format!("{} — {}", fw.name, fw.description)),
                None => (framework_id.to_uppercase(), framework_id.clone()),
            };
            let color = library
                .framework(framework_id)
                .map(|fw| theme.accent_from_hex(&fw.color))
                .unwrap_or(theme.purple);
            let badge = egui::Button::new(RichText::new(label).color(color).small())
                .fill(theme.background_dark)
                .stroke(egui::Stroke::new(1.0, color));
            if ui.add(badge).on_hover_text(hover).clicked() {
                clicked = Some(framework_id.clone());
            }
        }
    });
    ui.add_space(4.0);
    clicked
}

/// The prompt body with live highlighting. Only this region depends on the
/// bindings, so a variable edit re-lays-out the text and nothing else.
fn prompt_text(ui: &mut egui::Ui, record: &PromptRecord, theme: &Theme, state: &CardState) {
    egui::Frame::new()
        .fill(theme.background_darker)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            let mut job = egui::text::LayoutJob::default();
            for span in template::highlight(&record.prompt, &state.bindings) {
                let format = match span.kind {
                    SpanKind::Template => egui::TextFormat {
                        font_id: egui::FontId::monospace(12.0),
                        color: theme.foreground,
                        ..Default::default()
                    },
                    SpanKind::Value => egui::TextFormat {
                        font_id: egui::FontId::monospace(12.0),
                        color: theme.yellow,
                        background: theme.selection,
                        ..Default::default()
                    },
                };
                job.append(&span.text, 0.0, format);
            }
            job.wrap.max_width = ui.available_width();
            ui.label(job);
        });
}

fn variable_fields(ui: &mut egui::Ui, record: &PromptRecord, theme: &Theme, state: &mut CardState) {
    if state.bindings.is_empty() {
        return;
    }

    ui.add_space(6.0);
    ui.label(theme.muted("Customize variables"));
    egui::Grid::new(("variables", &record.id)).num_columns(2).spacing([8.0, 4.0]).show(
        ui,
        |ui| {
            for (token, value) in &mut state.bindings {
                let label = template::humanize(token);
                ui.label(RichText::new(&label).small());
                ui.add(
                    egui::TextEdit::singleline(value)
                        .hint_text(format!("Enter {}...", label.to_lowercase()))
                        .desired_width(f32::INFINITY),
                );
                ui.end_row();
            }
        },
    );
}

fn platform_tags(ui: &mut egui::Ui, record: &PromptRecord, library: &Library, theme: &Theme) {
    ui.horizontal_wrapped(|ui| {
        for platform_id in &record.platforms {
            let (name, color) = match library.platform(platform_id) {
                Some(platform) => {
                    (platform.name.clone(), theme.accent_from_hex(&platform.color))
                }
                None => (platform_id.clone(), theme.comment),
            };
            ui.label(RichText::new(format!("● {}", name)).color(color).small());
        }
    });
}

fn platform_notes(
    ui: &mut egui::Ui,
    record: &PromptRecord,
    library: &Library,
    theme: &Theme,
    state: &mut CardState,
) {
    if record.platform_notes.is_empty() {
        return;
    }

    let arrow = if state.notes_expanded { "⏷" } else { "⏵" };
    if ui.button(RichText::new(format!("{} Platform notes", arrow)).small()).clicked() {
        state.notes_expanded = !state.notes_expanded;
    }

    if state.notes_expanded {
        // Lookup-table order keeps the note list stable across frames.
        for platform in &library.platforms {
            if let Some(note) = record.platform_notes.get(&platform.id) {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new(format!("{}:", platform.name))
                            .color(theme.accent_from_hex(&platform.color))
                            .small(),
                    );
                    ui.label(RichText::new(note).color(theme.comment).small());
                });
            }
        }
        // Notes for platforms missing from the lookup table still render.
        for (platform_id, note) in &record.platform_notes {
            if library.platform(platform_id).is_none() {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(format!("{}:", platform_id)).small());
                    ui.label(RichText::new(note).color(theme.comment).small());
                });
            }
        }
    }
}
