//! Clipboard port.

use crate::domain::AppError;

/// Port for writing copied prompts to a clipboard.
pub trait ClipboardWriter {
    /// Write text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}

/// Clipboard that accepts and discards everything.
///
/// The CLI prints copied prompts to stdout, so a real clipboard is optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClipboard;

impl ClipboardWriter for NoopClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), AppError> {
        Ok(())
    }
}

/// In-memory clipboard capturing the last written text, for tests.
#[derive(Debug, Clone, Default)]
pub struct BufferClipboard {
    pub last: Option<String>,
}

impl ClipboardWriter for BufferClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.last = Some(text.to_string());
        Ok(())
    }
}
