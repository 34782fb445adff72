//! Avatar value holder and the default person glyph.

use eframe::egui;

/// Draws the speaker's avatar inside the circular slot the message row
/// reserves for it.
///
/// An `Avatar` is just a draw callback: any closure that paints into the
/// `Ui` it is handed. The slot background, circular border, and clipping
/// are owned by the message renderer; the callback only supplies the
/// content. The default instance paints a generic person silhouette.
///
/// ```
/// use egui_message_view::Avatar;
///
/// let initial = Avatar::new(|ui| {
///     ui.label("K");
/// });
/// # let _ = initial;
/// ```
pub struct Avatar {
    draw: Box<dyn Fn(&mut egui::Ui)>,
}

impl Avatar {
    /// Wrap a draw callback.
    pub fn new(draw: impl Fn(&mut egui::Ui) + 'static) -> Self {
        Self { draw: Box::new(draw) }
    }

    /// The generic person-silhouette avatar.
    pub fn person() -> Self {
        Self::new(person_glyph)
    }

    /// Run the callback inside the given slot `Ui`.
    pub(crate) fn draw(&self, ui: &mut egui::Ui) {
        (self.draw)(ui);
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::person()
    }
}

/// Paint a head-and-shoulders silhouette filling the slot rect.
///
/// Proportions are relative to the slot height so the glyph scales with
/// whatever size the renderer allocates. The shoulders circle is cut off
/// by the slot's clip rect, which gives the flat-bottomed bust shape.
fn person_glyph(ui: &mut egui::Ui) {
    let rect = ui.max_rect();
    let color = ui.visuals().strong_text_color();
    let painter = ui.painter();

    let head_center = rect.center() - egui::vec2(0.0, rect.height() * 0.14);
    painter.circle_filled(head_center, rect.height() * 0.15, color);

    let shoulders_center = rect.center() + egui::vec2(0.0, rect.height() * 0.28);
    painter.circle_filled(shoulders_center, rect.height() * 0.21, color);
}
