pub mod errors;
pub mod filter;
pub mod fixture;
pub mod models;
pub mod template;

pub use errors::PromptDeckError;
pub use filter::FilterState;
pub use models::{Difficulty, Library, PromptRecord};
