use std::time::Duration;

use eframe::egui;

use super::{
    countdown::Countdown,
    theme::Theme,
};

const DISMISS_AFTER: Duration = Duration::from_secs(2);

/// Single transient notification. A new message supersedes whatever is on
/// screen and restarts the dismiss countdown.
#[derive(Default)]
pub struct Toast {
    message: Option<String>,
    dismiss: Countdown,
}

impl Toast {
    pub fn notify(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.dismiss.arm(DISMISS_AFTER);
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if self.dismiss.fire() {
            self.message = None;
        }

        let Some(message) = &self.message else {
            return;
        };

        egui::Area::new(egui::Id::new("toast"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::Vec2::new(0.0, -24.0))
            .show(ctx, |ui| {
                egui::Frame::window(&ctx.style())
                    .fill(theme.background_darker)
                    .stroke(egui::Stroke::new(1.0, theme.purple))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(14, 8))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(message).color(theme.foreground));
                    });
            });

        if let Some(remaining) = self.dismiss.remaining() {
            ctx.request_repaint_after(remaining);
        }
    }
}
