//! Clipboard payload conversion: HTML fragments become Markdown, with a
//! plain-text fallback.
//!
//! HTML is preferred because it preserves structural intent (emphasis,
//! lists, links). Conversion never fails outward: converter errors and
//! empty results degrade to the plain-text alternative.

/// The two alternatives a host clipboard offers for one paste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardPayload {
    /// Rich HTML alternative, if the clipboard carries one
    pub html: Option<String>,
    /// Plain-text alternative, if the clipboard carries one
    pub text: Option<String>,
}

impl ClipboardPayload {
    /// Payload with only a plain-text alternative
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            html: None,
            text: Some(text.into()),
        }
    }

    /// Payload with both HTML and plain-text alternatives
    pub fn with_html(html: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            text: Some(text.into()),
        }
    }

    /// Check if neither alternative carries content
    pub fn is_empty(&self) -> bool {
        self.html.as_deref().unwrap_or("").is_empty()
            && self.text.as_deref().unwrap_or("").is_empty()
    }
}

/// Convert a clipboard payload to the Markdown text to insert.
///
/// Prefers the HTML alternative when present and non-empty; falls back to
/// the plain text when conversion errors or produces nothing. Returns the
/// empty string when no alternative has content.
pub fn convert_payload(payload: &ClipboardPayload) -> String {
    if let Some(html) = payload.html.as_deref() {
        if !html.is_empty() {
            match htmd::convert(html) {
                Ok(markdown) if !markdown.is_empty() => return markdown,
                Ok(_) => {
                    tracing::trace!("HTML conversion produced no output, using plain text");
                }
                Err(e) => {
                    tracing::warn!("HTML conversion failed: {}, using plain text", e);
                }
            }
        }
    }
    payload.text.clone().unwrap_or_default()
}
