//! Chat message bubble widget for egui.
//!
//! Renders a single message row: a circular speaker avatar, an optional
//! speaker name, and text-or-image content, mirrored left/right depending
//! on whether the message is inbound or outbound. Colors come from a
//! caller-supplied [`MessageTheme`] role table; the widget holds no state
//! between calls.

pub mod avatar;
pub mod config;
pub mod content;
pub mod layout;
pub mod render;
pub mod theme;

pub use avatar::Avatar;
pub use config::MessageConfig;
pub use content::MessageContent;
pub use layout::{resolve_layout, AvatarPosition, ColorRole, LayoutParams};
pub use render::render_message;
pub use theme::MessageTheme;
