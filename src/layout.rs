//! Side resolver: turns the inbound/outbound flag into a complete layout.
//!
//! Everything that mirrors between "their" messages and "my" messages is
//! decided here, in one place: alignment, row packing direction, avatar
//! position, the asymmetric outer inset, the squared "tail" corner, and
//! which theme color roles the bubble uses. `resolve_layout` is pure and
//! total over its boolean input.

use eframe::egui::{Align, CornerRadius, Layout, Margin};

/// Horizontal inset on the side opposite the avatar, so messages never
/// span the full row width.
pub const OUTER_FAR_INSET: i8 = 32;
/// Vertical inset above and below each message row.
pub const OUTER_VERTICAL_INSET: i8 = 4;
/// Radius of the three rounded bubble corners.
pub const BUBBLE_CORNER_RADIUS: u8 = 8;

/// Named theme color, resolved to a concrete color by
/// [`MessageTheme::color`](crate::theme::MessageTheme::color) at render
/// time. The component never holds literal colors itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    OnPrimary,
    Secondary,
    OnSecondary,
    OnSurface,
}

/// Where the avatar slot sits relative to the message body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarPosition {
    BeforeBody,
    AfterBody,
}

/// Fully resolved visual parameters for one message row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Cross alignment of the name/content column.
    pub body_align: Align,
    /// Row direction; children pack toward the speaker's edge. Laying the
    /// avatar down first in this direction realizes [`Self::avatar_position`]
    /// while letting the body take the remaining width.
    pub row_layout: Layout,
    /// Visual order of avatar and body.
    pub avatar_position: AvatarPosition,
    /// Asymmetric inset around the row: 0 on the avatar side,
    /// [`OUTER_FAR_INSET`] on the far side, [`OUTER_VERTICAL_INSET`] above
    /// and below.
    pub outer_margin: Margin,
    /// Bubble rounding. The top corner nearest the avatar is squared to
    /// anchor the bubble to its speaker; the rest are rounded.
    pub bubble_corners: CornerRadius,
    /// Bubble fill role.
    pub background: ColorRole,
    /// Bubble text role.
    pub foreground: ColorRole,
}

/// Map the outbound flag to a complete [`LayoutParams`].
///
/// Inbound (`trailing == false`): avatar leading, content start-aligned,
/// secondary colors, top-left corner squared. Outbound: the mirror image
/// with primary colors and the top-right corner squared.
pub fn resolve_layout(trailing: bool) -> LayoutParams {
    if !trailing {
        LayoutParams {
            body_align: Align::Min,
            row_layout: Layout::left_to_right(Align::TOP),
            avatar_position: AvatarPosition::BeforeBody,
            outer_margin: Margin {
                left: 0,
                right: OUTER_FAR_INSET,
                top: OUTER_VERTICAL_INSET,
                bottom: OUTER_VERTICAL_INSET,
            },
            bubble_corners: CornerRadius {
                nw: 0,
                ne: BUBBLE_CORNER_RADIUS,
                sw: BUBBLE_CORNER_RADIUS,
                se: BUBBLE_CORNER_RADIUS,
            },
            background: ColorRole::Secondary,
            foreground: ColorRole::OnSecondary,
        }
    } else {
        LayoutParams {
            body_align: Align::Max,
            row_layout: Layout::right_to_left(Align::TOP),
            avatar_position: AvatarPosition::AfterBody,
            outer_margin: Margin {
                left: OUTER_FAR_INSET,
                right: 0,
                top: OUTER_VERTICAL_INSET,
                bottom: OUTER_VERTICAL_INSET,
            },
            bubble_corners: CornerRadius {
                nw: BUBBLE_CORNER_RADIUS,
                ne: 0,
                sw: BUBBLE_CORNER_RADIUS,
                se: BUBBLE_CORNER_RADIUS,
            },
            background: ColorRole::Primary,
            foreground: ColorRole::OnPrimary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Direction;

    #[test]
    fn avatar_leads_only_for_inbound_messages() {
        assert_eq!(
            resolve_layout(false).avatar_position,
            AvatarPosition::BeforeBody
        );
        assert_eq!(
            resolve_layout(true).avatar_position,
            AvatarPosition::AfterBody
        );
    }

    #[test]
    fn row_packs_toward_the_speaker_edge() {
        assert_eq!(
            resolve_layout(false).row_layout.main_dir,
            Direction::LeftToRight
        );
        assert_eq!(
            resolve_layout(true).row_layout.main_dir,
            Direction::RightToLeft
        );
    }

    #[test]
    fn body_aligns_to_the_speaker_side() {
        assert_eq!(resolve_layout(false).body_align, Align::Min);
        assert_eq!(resolve_layout(true).body_align, Align::Max);
    }

    #[test]
    fn exactly_one_corner_is_squared_on_the_avatar_side() {
        for trailing in [false, true] {
            let c = resolve_layout(trailing).bubble_corners;
            let corners = [c.nw, c.ne, c.sw, c.se];
            assert_eq!(
                corners.iter().filter(|&&r| r == 0).count(),
                1,
                "trailing={trailing}"
            );
            // The squared corner is the top one nearest the avatar.
            if trailing {
                assert_eq!(c.ne, 0);
            } else {
                assert_eq!(c.nw, 0);
            }
            for r in corners.into_iter().filter(|&r| r != 0) {
                assert_eq!(r, BUBBLE_CORNER_RADIUS);
            }
        }
    }

    #[test]
    fn outer_margin_sums_are_side_independent() {
        for trailing in [false, true] {
            let m = resolve_layout(trailing).outer_margin;
            assert_eq!(m.left as i32 + m.right as i32, OUTER_FAR_INSET as i32);
            assert_eq!(
                m.top as i32 + m.bottom as i32,
                2 * OUTER_VERTICAL_INSET as i32
            );
        }
    }

    #[test]
    fn margin_is_zero_on_the_avatar_side() {
        assert_eq!(resolve_layout(false).outer_margin.left, 0);
        assert_eq!(resolve_layout(true).outer_margin.right, 0);
    }

    #[test]
    fn color_roles_express_ownership() {
        let inbound = resolve_layout(false);
        assert_eq!(inbound.background, ColorRole::Secondary);
        assert_eq!(inbound.foreground, ColorRole::OnSecondary);

        let outbound = resolve_layout(true);
        assert_eq!(outbound.background, ColorRole::Primary);
        assert_eq!(outbound.foreground, ColorRole::OnPrimary);
    }
}
