//! Color role table the message view consumes.
//!
//! The widget never defines colors at its call sites; it asks the theme
//! for one of five named roles. Callers can hand in the bundled dark or
//! light palette or build their own table from the host application's
//! colors.

use eframe::egui::Color32;

use crate::layout::ColorRole;

/// The five color roles a message bubble resolves at render time.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageTheme {
    /// Outbound bubble fill.
    pub primary: Color32,
    /// Text on `primary`.
    pub on_primary: Color32,
    /// Inbound bubble fill and avatar slot background.
    pub secondary: Color32,
    /// Text on `secondary`.
    pub on_secondary: Color32,
    /// Avatar border stroke.
    pub on_surface: Color32,
}

impl MessageTheme {
    /// Dark palette.
    pub fn dark() -> Self {
        Self {
            primary: Color32::from_rgb(88, 101, 242),      // Accent blue
            on_primary: Color32::WHITE,
            secondary: Color32::from_rgb(56, 56, 74),      // Elevated surface
            on_secondary: Color32::from_rgb(229, 229, 234),
            on_surface: Color32::from_rgb(185, 187, 190),
        }
    }

    /// Light palette.
    pub fn light() -> Self {
        Self {
            primary: Color32::from_rgb(88, 101, 242),      // Accent blue
            on_primary: Color32::WHITE,
            secondary: Color32::from_rgb(227, 229, 232),   // Raised gray
            on_secondary: Color32::from_rgb(6, 6, 7),
            on_surface: Color32::from_rgb(79, 86, 96),
        }
    }

    /// Resolve a named role to its concrete color.
    pub fn color(&self, role: ColorRole) -> Color32 {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::OnPrimary => self.on_primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::OnSecondary => self.on_secondary,
            ColorRole::OnSurface => self.on_surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_resolve_to_their_fields() {
        let theme = MessageTheme::dark();
        assert_eq!(theme.color(ColorRole::Primary), theme.primary);
        assert_eq!(theme.color(ColorRole::OnPrimary), theme.on_primary);
        assert_eq!(theme.color(ColorRole::Secondary), theme.secondary);
        assert_eq!(theme.color(ColorRole::OnSecondary), theme.on_secondary);
        assert_eq!(theme.color(ColorRole::OnSurface), theme.on_surface);
    }

    #[test]
    fn bubble_fills_differ_between_sides() {
        for theme in [MessageTheme::dark(), MessageTheme::light()] {
            assert_ne!(theme.primary, theme.secondary);
        }
    }
}
