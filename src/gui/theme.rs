use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    pub background: Color32,
    pub foreground: Color32,
    pub selection: Color32,
    pub comment: Color32,
    pub red: Color32,
    pub orange: Color32,
    pub yellow: Color32,
    pub green: Color32,
    pub purple: Color32,
    pub cyan: Color32,
    pub background_darker: Color32,
    pub background_dark: Color32,
    pub background_light: Color32,
    pub background_lighter: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night_storm()
    }
}

impl Theme {
    pub fn tokyo_night_storm() -> Self {
        Self {
            background: Color32::from_rgb(23, 24, 38),
            foreground: Color32::from_rgb(204, 204, 204),
            selection: Color32::from_rgb(68, 71, 90),
            comment: Color32::from_rgb(98, 114, 164),
            red: Color32::from_rgb(255, 121, 121),
            orange: Color32::from_rgb(255, 161, 90),
            yellow: Color32::from_rgb(241, 250, 140),
            green: Color32::from_rgb(86, 209, 123),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(97, 175, 239),
            background_darker: Color32::from_rgb(19, 20, 32),
            background_dark: Color32::from_rgb(27, 29, 45),
            background_light: Color32::from_rgb(42, 44, 66),
            background_lighter: Color32::from_rgb(56, 58, 78),
        }
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.purple)
    }

    pub fn muted(&self, content: &str) -> RichText {
        RichText::new(content).color(self.comment)
    }

    /// Lookup-table hex colors ("#7C3AED"), falling back to the accent
    /// color when a table carries something unparsable.
    pub fn accent_from_hex(&self, hex: &str) -> Color32 {
        color_from_hex(hex).unwrap_or(self.purple)
    }
}

pub fn color_from_hex(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let default = Visuals::dark();

    ctx.set_visuals(Visuals {
        dark_mode: true,
        widgets: Widgets {
            noninteractive: WidgetVisuals {
                bg_fill: theme.background,
                weak_bg_fill: theme.background_lighter,
                bg_stroke: Stroke {
                    color: theme.background_dark,
                    ..default.widgets.noninteractive.bg_stroke
                },
                fg_stroke: Stroke {
                    color: theme.foreground,
                    ..default.widgets.noninteractive.fg_stroke
                },
                ..default.widgets.noninteractive
            },
            inactive: WidgetVisuals {
                bg_fill: theme.background_light,
                weak_bg_fill: theme.background_lighter,
                bg_stroke: Stroke {
                    color: theme.background_dark,
                    ..default.widgets.inactive.bg_stroke
                },
                fg_stroke: Stroke {
                    color: theme.foreground,
                    ..default.widgets.inactive.fg_stroke
                },
                ..default.widgets.inactive
            },
            hovered: WidgetVisuals {
                bg_fill: theme.selection,
                weak_bg_fill: theme.background_lighter,
                bg_stroke: Stroke { color: theme.cyan, ..default.widgets.hovered.bg_stroke },
                fg_stroke: Stroke {
                    color: theme.foreground,
                    ..default.widgets.hovered.fg_stroke
                },
                ..default.widgets.hovered
            },
            active: WidgetVisuals {
                bg_fill: theme.selection,
                weak_bg_fill: theme.background_light,
                bg_stroke: Stroke { color: theme.cyan, ..default.widgets.active.bg_stroke },
                fg_stroke: Stroke {
                    color: theme.foreground,
                    ..default.widgets.active.fg_stroke
                },
                ..default.widgets.active
            },
            open: WidgetVisuals {
                bg_fill: theme.background_dark,
                weak_bg_fill: theme.background_lighter,
                bg_stroke: Stroke { color: theme.purple, ..default.widgets.open.bg_stroke },
                fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                ..default.widgets.open
            },
        },
        selection: Selection {
            bg_fill: theme.selection,
            stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
        },
        hyperlink_color: theme.cyan,
        faint_bg_color: theme.background_darker,
        extreme_bg_color: theme.background_darker,
        code_bg_color: theme.background_dark,
        error_fg_color: theme.red,
        warn_fg_color: theme.orange,
        window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
        window_fill: theme.background,
        window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
        panel_fill: theme.background_dark,
        popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
        collapsing_header_frame: true,
        ..default
    });

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
