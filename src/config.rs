//! Per-message configuration.

use crate::avatar::Avatar;

/// How a single message should be presented.
///
/// Built fresh for every render call; the widget keeps no state between
/// calls. All fields have documented defaults, so call sites usually use
/// struct-update syntax:
///
/// ```
/// use egui_message_view::MessageConfig;
///
/// let outbound = MessageConfig {
///     trailing: true,
///     ..Default::default()
/// };
/// # let _ = outbound;
/// ```
pub struct MessageConfig {
    /// `true` for the local user's outbound messages (right-aligned),
    /// `false` for inbound ones. Default: `false`.
    pub trailing: bool,
    /// Avatar shown next to the message. `None` suppresses the slot
    /// entirely: nothing is drawn and no space is reserved for it.
    /// Default: the generic person avatar.
    pub avatar: Option<Avatar>,
    /// Speaker name shown above the content. `None` omits the label and
    /// its gap. Default: `None`.
    pub speaker_name: Option<String>,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            trailing: false,
            avatar: Some(Avatar::default()),
            speaker_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_inbound_with_avatar_and_no_name() {
        let config = MessageConfig::default();
        assert!(!config.trailing);
        assert!(config.avatar.is_some());
        assert!(config.speaker_name.is_none());
    }
}
