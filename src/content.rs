//! Message content variants.

use eframe::egui::load::SizedTexture;

/// What a message bubble displays: either plain text or an image.
///
/// The enum is closed, so every consumer match is checked for
/// exhaustiveness at compile time; there is no "unknown content" branch
/// anywhere in the crate.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageContent {
    /// Plain text, rendered inside a filled bubble.
    Text(String),
    /// An already-uploaded texture (id + native size). The crate never
    /// fetches, decodes, or caches image data itself.
    Image(SizedTexture),
}

impl MessageContent {
    /// Convenience constructor for text content.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}
