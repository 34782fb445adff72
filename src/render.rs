//! Message row rendering: avatar slot, content renderers, and assembly.

use eframe::egui;

use crate::config::MessageConfig;
use crate::content::MessageContent;
use crate::layout::{resolve_layout, ColorRole, LayoutParams};
use crate::theme::MessageTheme;

/// Diameter of the circular avatar slot.
pub const AVATAR_SIZE: f32 = 48.0;
/// Stroke width of the avatar border.
pub const AVATAR_BORDER_WIDTH: f32 = 1.5;
/// Fixed horizontal gap between the avatar slot and the body column.
/// Present whether or not an avatar is shown; it belongs to the row.
pub const AVATAR_BODY_GAP: f32 = 8.0;
/// Vertical gap between the speaker name and the content.
pub const NAME_GAP: f32 = 4.0;
/// Inner padding of the text bubble.
pub const BUBBLE_PADDING: i8 = 12;
/// Bounding box images are scaled down to fit (width x height).
pub const IMAGE_MAX_SIZE: egui::Vec2 = egui::Vec2::new(200.0, 300.0);

/// Render one chat message: avatar, optional speaker name, and content,
/// mirrored according to `config.trailing`.
///
/// Pure per call: all inputs are borrowed for the duration of the call and
/// nothing is stored. Returns the response covering the padded row.
pub fn render_message(
    ui: &mut egui::Ui,
    content: &MessageContent,
    config: &MessageConfig,
    theme: &MessageTheme,
) -> egui::Response {
    let layout = resolve_layout(config.trailing);

    egui::Frame::new()
        .inner_margin(layout.outer_margin)
        .show(ui, |ui| {
            ui.with_layout(layout.row_layout, |ui| {
                // All gaps in the row are explicit.
                ui.spacing_mut().item_spacing = egui::Vec2::ZERO;

                // The avatar is laid down first so the body can take the
                // remaining width. In a right-to-left row this puts it at
                // the trailing edge, after the body.
                speaker_avatar(ui, config, theme);
                ui.add_space(AVATAR_BODY_GAP);

                let body_width = ui.available_width();
                ui.allocate_ui_with_layout(
                    egui::vec2(body_width, 0.0),
                    egui::Layout::top_down(layout.body_align),
                    |ui| {
                        ui.set_width(body_width);
                        if let Some(name) = &config.speaker_name {
                            ui.label(name);
                            ui.add_space(NAME_GAP);
                        }
                        render_content(ui, content, &layout, theme);
                    },
                );
            });
        })
        .response
}

/// Render the circular avatar slot, or nothing when the avatar is
/// suppressed.
///
/// The slot is a fixed-size circle filled with the `secondary` role,
/// clipped to its rect, with the avatar's draw callback run inside and an
/// `on_surface` border stroked on top.
pub(crate) fn speaker_avatar(
    ui: &mut egui::Ui,
    config: &MessageConfig,
    theme: &MessageTheme,
) -> Option<egui::Response> {
    let avatar = config.avatar.as_ref()?;

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
    let radius = AVATAR_SIZE / 2.0;

    ui.painter()
        .circle_filled(rect.center(), radius, theme.color(ColorRole::Secondary));

    let mut content_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::centered_and_justified(
                egui::Direction::LeftToRight,
            )),
    );
    content_ui.set_clip_rect(rect.intersect(ui.clip_rect()));
    avatar.draw(&mut content_ui);

    ui.painter().circle_stroke(
        rect.center(),
        radius,
        egui::Stroke::new(AVATAR_BORDER_WIDTH, theme.color(ColorRole::OnSurface)),
    );

    Some(response)
}

/// Render the message content for the resolved layout.
fn render_content(
    ui: &mut egui::Ui,
    content: &MessageContent,
    layout: &LayoutParams,
    theme: &MessageTheme,
) {
    match content {
        MessageContent::Text(text) => {
            egui::Frame::new()
                .fill(theme.color(layout.background))
                .corner_radius(layout.bubble_corners)
                .inner_margin(egui::Margin::same(BUBBLE_PADDING))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(text).color(theme.color(layout.foreground)));
                });
        }
        MessageContent::Image(texture) => {
            let size = scaled_image_size(texture.size, IMAGE_MAX_SIZE);
            ui.add(egui::Image::from_texture(*texture).fit_to_exact_size(size));
        }
    }
}

/// Scale `native` down proportionally so it fits inside `max`.
///
/// The cap is a maximum, not a target: sizes already inside the box are
/// returned unchanged, never scaled up.
fn scaled_image_size(native: egui::Vec2, max: egui::Vec2) -> egui::Vec2 {
    if native.x <= max.x && native.y <= max.y {
        return native;
    }
    let scale = (max.x / native.x).min(max.y / native.y);
    native * scale
}
