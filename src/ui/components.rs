//! Reusable UI components
//!
//! Standalone widgets used by the grid and the icon info sheet.

use crate::theme;
use eframe::egui;

/// Round icon button with a caption underneath. Returns the click response.
pub fn icon_link(ui: &mut egui::Ui, icon: &str, label: &str) -> egui::Response {
    let size = egui::vec2(88.0, 72.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let circle_center = egui::pos2(rect.center().x, rect.min.y + 24.0);
        let fill = if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            theme::ACCENT_CONTAINER
        } else {
            theme::BG_SURFACE
        };
        painter.circle_filled(circle_center, 24.0, fill);
        painter.text(
            circle_center,
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(22.0),
            theme::TEXT_PRIMARY,
        );
        painter.text(
            egui::pos2(rect.center().x, rect.max.y),
            egui::Align2::CENTER_BOTTOM,
            label,
            egui::FontId::proportional(theme::FONT_LABEL),
            theme::TEXT_MUTED,
        );
    }

    response
}

/// Section caption in the accent color ("Drawable", "Mapped components")
pub fn section_title(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.add_space(theme::SPACING_LG);
        ui.add(
            egui::Label::new(
                egui::RichText::new(text)
                    .size(theme::FONT_LABEL)
                    .strong()
                    .color(theme::ACCENT),
            )
            .selectable(false),
        );
    });
    ui.add_space(theme::SPACING_SM);
}

/// Single-entry card row: a label with a dimmed description below it
pub fn simple_list_row(ui: &mut egui::Ui, label: &str, description: &str) {
    theme::list_row_frame(true, true).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(label).size(theme::FONT_BODY).color(theme::TEXT_PRIMARY));
        ui.add(
            egui::Label::new(
                egui::RichText::new(description)
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
            )
            .wrap(),
        );
    });
}
