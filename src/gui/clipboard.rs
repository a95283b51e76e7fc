use crate::core::PromptDeckError;

/// Seam for the one piece of outside I/O. The core never inspects why a
/// write failed, only whether it did.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), PromptDeckError>;
}

/// arboard-backed system clipboard. The handle is created per write; some
/// platforms invalidate stale handles across focus changes.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), PromptDeckError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| PromptDeckError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| PromptDeckError::Clipboard(e.to_string()))
    }
}
