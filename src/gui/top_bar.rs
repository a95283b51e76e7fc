use eframe::egui::{
    self,
    RichText,
};

use super::{
    browser::BrowserState,
    theme::Theme,
};
use crate::core::models::{
    Difficulty,
    Library,
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        browser: &mut BrowserState,
        library: &Library,
        theme: &Theme,
        focus_search: bool,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.heading(theme.heading("Prompt Deck"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(theme.muted(&format!(
                        "{} of {} prompts",
                        browser.visible_count(),
                        library.prompts.len()
                    )));
                });
            });

            ui.add_space(4.0);
            Self::search_row(ui, ctx, browser, focus_search);
            ui.add_space(4.0);
            Self::platform_row(ui, browser, library);
            Self::difficulty_row(ui, browser);
            ui.add_space(4.0);
            Self::combo_row(ui, browser, library);
            ui.add_space(6.0);
        });
    }

    fn search_row(
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        browser: &mut BrowserState,
        focus_search: bool,
    ) {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut browser.search_input)
                    .hint_text("Search prompts...  ( / )")
                    .desired_width(320.0),
            );
            if response.changed() {
                browser.search_edited();
            }
            if focus_search {
                response.request_focus();
            }
            if response.has_focus() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                browser.clear_search();
                response.surrender_focus();
            }

            if browser.has_active_filters() && ui.button("✖ Clear filters").clicked() {
                browser.clear_filters();
            }
        });
    }

    fn platform_row(ui: &mut egui::Ui, browser: &mut BrowserState, library: &Library) {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Platform").small());
            let selected = browser.filters().platform.clone();
            if ui.selectable_label(selected.is_none(), "All").clicked() {
                browser.set_platform(None);
            }
            for platform in &library.platforms {
                let active = selected.as_deref() == Some(platform.id.as_str());
                if ui.selectable_label(active, &platform.name).clicked() {
                    browser.set_platform(Some(platform.id.clone()));
                }
            }
        });
    }

    fn difficulty_row(ui: &mut egui::Ui, browser: &mut BrowserState) {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Difficulty").small());
            let selected = browser.filters().difficulty;
            if ui.selectable_label(selected.is_none(), "All").clicked() {
                browser.set_difficulty(None);
            }
            for difficulty in Difficulty::ALL {
                if ui.selectable_label(selected == Some(difficulty), difficulty.label()).clicked()
                {
                    browser.set_difficulty(Some(difficulty));
                }
            }
        });
    }

    fn combo_row(ui: &mut egui::Ui, browser: &mut BrowserState, library: &Library) {
        ui.horizontal(|ui| {
            let category_text = browser
                .filters()
                .category
                .as_deref()
                .and_then(|slug| library.category(slug))
                .map(|c| format!("{} {}", c.icon, c.name))
                .unwrap_or_else(|| "All categories".to_string());
            egui::ComboBox::from_id_salt("category_select")
                .selected_text(category_text)
                .show_ui(ui, |ui| {
                    let mut selection = browser.filters().category.clone();
                    ui.selectable_value(&mut selection, None, "All categories");
                    for category in &library.categories {
                        ui.selectable_value(
                            &mut selection,
                            Some(category.slug.clone()),
                            format!("{} {}", category.icon, category.name),
                        );
                    }
                    browser.set_category(selection);
                });

            let framework_text = browser
                .filters()
                .framework
                .as_deref()
                .and_then(|id| library.framework(id))
                .map(|f| format!("{} - {}", f.short_label, f.name))
                .unwrap_or_else(|| "All frameworks".to_string());
            egui::ComboBox::from_id_salt("framework_select")
                .selected_text(framework_text)
                .show_ui(ui, |ui| {
                    let mut selection = browser.filters().framework.clone();
                    ui.selectable_value(&mut selection, None, "All frameworks");
                    for framework in &library.frameworks {
                        ui.selectable_value(
                            &mut selection,
                            Some(framework.id.clone()),
                            format!("{} - {}", framework.short_label, framework.name),
                        );
                    }
                    browser.set_framework(selection);
                });
        });
    }
}
