#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use promptdeck::gui::PromptDeckApp;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Prompt Deck"),
        ..Default::default()
    };

    eframe::run_native(
        "promptdeck",
        options,
        Box::new(|cc| Ok(Box::new(PromptDeckApp::new(cc)))),
    )
}
