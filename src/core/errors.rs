use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptDeckError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
