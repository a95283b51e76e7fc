use eframe::egui;

use super::{
    browser::BrowserState,
    card::{
        prompt_card,
        CardAction,
    },
    clipboard::SystemClipboard,
    theme::{
        set_theme,
        Theme,
    },
    toast::Toast,
    top_bar::TopBar,
};
use crate::core::{
    fixture,
    models::Library,
};

pub struct PromptDeckApp {
    library: Library,
    browser: BrowserState,
    theme: Theme,
    toast: Toast,
    clipboard: SystemClipboard,
}

impl PromptDeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let library = fixture::load_or_empty();
        log::info!("Prompt catalog loaded with {} prompts", library.prompts.len());

        let theme = Theme::default();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.1);

        Self {
            library,
            browser: BrowserState::default(),
            theme,
            toast: Toast::default(),
            clipboard: SystemClipboard,
        }
    }

    /// "/" focuses search unless a text widget already has focus; Escape is
    /// handled inside the search row itself.
    fn wants_search_focus(&self, ctx: &egui::Context) -> bool {
        !ctx.wants_keyboard_input() && ctx.input(|i| i.key_pressed(egui::Key::Slash))
    }

    fn show_cards(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.browser.visible_count() == 0 {
                ui.add_space(60.0);
                ui.vertical_centered(|ui| {
                    ui.heading(self.theme.heading("No prompts found"));
                    let hint = if self.library.prompts.is_empty() {
                        "The prompt catalog is empty."
                    } else {
                        "Try adjusting your filters or search."
                    };
                    ui.label(self.theme.muted(hint));
                });
                return;
            }

            let mut pending_action = None;
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                for idx in self.browser.visible_indices().to_vec() {
                    let record = self.library.prompts[idx].clone();
                    let state = self.browser.card_state(&record);
                    if let Some(action) = prompt_card(
                        ui,
                        &record,
                        &self.library,
                        &self.theme,
                        state,
                        &mut self.clipboard,
                        &mut self.toast,
                    ) {
                        pending_action = Some(action);
                    }
                    ui.add_space(8.0);
                }
            });

            // The one cross-card effect: a framework badge narrows the
            // whole list, recomputed on the next ensure_indices.
            if let Some(CardAction::FilterFramework(framework_id)) = pending_action {
                self.browser.set_framework(Some(framework_id));
            }
        });
    }
}

impl eframe::App for PromptDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let focus_search = self.wants_search_focus(ctx);

        self.browser.tick();
        self.browser.ensure_indices(&self.library.prompts);

        TopBar::show(ctx, &mut self.browser, &self.library, &self.theme, focus_search);
        self.show_cards(ctx);
        self.toast.show(ctx, &self.theme);

        // Keep frames coming while a debounce or copied-revert is pending.
        if let Some(deadline) = self.browser.next_deadline() {
            ctx.request_repaint_after(deadline);
        }
    }
}
