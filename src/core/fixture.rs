use super::{
    errors::PromptDeckError,
    models::Library,
};

const FIXTURE: &str = include_str!("../../assets/prompts.json");

pub fn load() -> Result<Library, PromptDeckError> {
    let library: Library = serde_json::from_str(FIXTURE)?;
    Ok(library)
}

/// A broken or absent fixture degrades to an empty library (empty-state
/// rendering), never a startup failure.
pub fn load_or_empty() -> Library {
    match load() {
        Ok(library) => library,
        Err(e) => {
            log::warn!("Failed to load prompt fixture: {}. Starting with an empty catalog.", e);
            Library::default()
        }
    }
}
