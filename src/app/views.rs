//! View rendering (search bar, icon grid)

use super::App;
use crate::theme;
use eframe::egui;

impl App {
    pub(crate) fn render_search_bar(&mut self, ui: &mut egui::Ui) {
        theme::search_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                            .size(16.0)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );

                let settings_w = 28.0;
                let search_id = ui.make_persistent_id("search_box");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.search_query)
                        .id(search_id)
                        .hint_text(format!("Search {} icons...", self.catalog.icons.len()))
                        .frame(false)
                        .desired_width(ui.available_width() - settings_w - theme::SPACING_MD),
                );
                if self.focus_search {
                    self.focus_search = false;
                    response.request_focus();
                }
                if response.changed() {
                    self.apply_filters();
                }

                let gear = ui.add(
                    egui::Button::new(egui::RichText::new(egui_phosphor::regular::GEAR).size(16.0))
                        .frame(false),
                );
                if gear.on_hover_text("Settings").clicked() {
                    self.show_settings = true;
                }
            });
        });
    }

    pub(crate) fn render_grid_view(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if let Some(err) = &self.catalog_error {
            ui.label(
                egui::RichText::new(format!(
                    "{}  Showing sample icons: {}",
                    egui_phosphor::regular::WARNING,
                    err
                ))
                .color(theme::STATUS_WARNING),
            );
            ui.add_space(theme::SPACING_MD);
        }

        if self.filtered_indices.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_XL);
                ui.label(egui::RichText::new("No icons found").color(theme::TEXT_DIM));
            });
            return;
        }

        let tile = if self.large_icons { theme::TILE_LARGE } else { theme::TILE_SMALL };
        let mut clicked: Option<usize> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .id_salt("icon_grid")
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_MD, theme::SPACING_MD);
                    let indices = self.filtered_indices.clone();
                    for icon_idx in indices {
                        let (rect, response) =
                            ui.allocate_exact_size(egui::vec2(tile, tile + 20.0), egui::Sense::click());
                        if !ui.is_rect_visible(rect) {
                            continue;
                        }

                        let label = self.catalog.icons[icon_idx]
                            .component_names
                            .first()
                            .map(|m| m.label.clone())
                            .unwrap_or_else(|| self.catalog.icons[icon_idx].drawable_name.clone());

                        let fill = if response.hovered() { theme::BG_SURFACE } else { theme::BG_ELEVATED };
                        let image_rect = egui::Rect::from_min_size(rect.min, egui::vec2(tile, tile));
                        ui.painter().rect_filled(image_rect, theme::RADIUS_LARGE, fill);

                        let inner = image_rect.shrink(tile * 0.18);
                        match self.icon_texture(ctx, icon_idx) {
                            Some(tex) => {
                                egui::Image::new(egui::load::SizedTexture::new(tex.id(), inner.size()))
                                    .paint_at(ui, inner);
                            }
                            None if self.catalog.svg_dir.is_none() => {
                                let glyph = self.catalog.placeholder_glyph(&self.catalog.icons[icon_idx]);
                                ui.painter().text(
                                    inner.center(),
                                    egui::Align2::CENTER_CENTER,
                                    glyph,
                                    egui::FontId::proportional(tile * 0.4),
                                    theme::TEXT_MUTED,
                                );
                            }
                            None => {
                                let initial = label.chars().next().unwrap_or('?').to_uppercase().to_string();
                                ui.painter().text(
                                    inner.center(),
                                    egui::Align2::CENTER_CENTER,
                                    initial,
                                    egui::FontId::proportional(tile * 0.4),
                                    theme::TEXT_MUTED,
                                );
                            }
                        }

                        let caption_rect = egui::Rect::from_min_max(
                            egui::pos2(rect.min.x, image_rect.max.y),
                            rect.max,
                        );
                        ui.painter().with_clip_rect(caption_rect).text(
                            caption_rect.center(),
                            egui::Align2::CENTER_CENTER,
                            &label,
                            egui::FontId::proportional(theme::FONT_SMALL),
                            theme::TEXT_MUTED,
                        );

                        if response.on_hover_text(&label).clicked() {
                            clicked = Some(icon_idx);
                        }
                    }
                });
            });

        if let Some(icon_idx) = clicked {
            self.open_icon_sheet(icon_idx);
        }
    }
}
