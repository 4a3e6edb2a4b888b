//! System clipboard access.
//!
//! Writes run on a detached thread so a slow or unavailable clipboard
//! never blocks the caller; failures are logged and swallowed. The write
//! has no effect on the buffer, so there is nothing to roll back.

use anyhow::Context;

/// Copy text to the system clipboard, fire-and-forget.
pub fn spawn_copy(text: String) {
    std::thread::spawn(move || {
        if let Err(e) = write_clipboard(&text) {
            tracing::warn!("Failed to copy to clipboard: {:#}", e);
        }
    });
}

fn write_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text)
        .context("clipboard write failed")?;
    Ok(())
}

/// Read plain text from the system clipboard. None when the clipboard is
/// unavailable or holds no text.
pub fn read_text() -> Option<String> {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!("Clipboard has no text: {}", e);
                None
            }
        },
        Err(e) => {
            tracing::warn!("Clipboard unavailable: {}", e);
            None
        }
    }
}
