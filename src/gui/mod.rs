pub mod app;
pub mod browser;
pub mod card;
pub mod clipboard;
pub mod countdown;
pub mod theme;
pub mod toast;
pub mod top_bar;

pub use app::PromptDeckApp;
