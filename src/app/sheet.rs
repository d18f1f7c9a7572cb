//! Icon info sheet: image, source identifier, grouped component mappings,
//! and the "View on GitHub" / "Share" actions

use super::App;
use crate::actions::{DesktopActions, IconActions};
use crate::constants::SHARE_MIME_TYPE;
use crate::presenter::IconInfoPresenter;
use crate::theme;
use crate::types::{GroupedMapping, IconInfo};
use crate::ui::components::{icon_link, section_title, simple_list_row};
use eframe::egui;
use tracing::info;

const OUTDATED_WARNING: &str =
    "Mappings are bundled with this build and may be outdated. Check GitHub for the latest list.";

/// What the user triggered from the sheet this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetAction {
    OpenedSource,
    Shared,
}

/// Interaction id of the sheet's close button
pub(crate) fn close_button_id() -> egui::Id {
    egui::Id::new("icon_info_sheet_close")
}

pub struct IconInfoSheet {
    icon: IconInfo,
    presenter: IconInfoPresenter,
    // Glyph drawn when the icon has no rendered texture
    placeholder: &'static str,
}

impl IconInfoSheet {
    pub fn new(icon: IconInfo, placeholder: &'static str) -> Self {
        let presenter = IconInfoPresenter::present(&icon);
        Self {
            icon,
            presenter,
            placeholder,
        }
    }

    pub fn icon(&self) -> &IconInfo {
        &self.icon
    }

    pub fn presenter(&self) -> &IconInfoPresenter {
        &self.presenter
    }

    pub fn open_source(&self, actions: &dyn IconActions) -> SheetAction {
        actions.open_link(&self.presenter.source_url);
        SheetAction::OpenedSource
    }

    pub fn share(&self, actions: &dyn IconActions) -> SheetAction {
        actions.share(&self.presenter.share_text, SHARE_MIME_TYPE);
        SheetAction::Shared
    }

    /// Render the sheet. `is_popup_shown(false)` is called once the user
    /// dismisses it (Escape, backdrop click or the close button).
    pub fn show(
        &self,
        ctx: &egui::Context,
        texture: Option<&egui::TextureHandle>,
        actions: &dyn IconActions,
        mut is_popup_shown: impl FnMut(bool),
    ) -> Option<SheetAction> {
        let mut action = None;
        let mut close_clicked = false;

        let id = egui::Id::new("icon_info_sheet");
        let area = egui::Modal::default_area(id)
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, 0.0])
            .default_width(theme::SHEET_WIDTH);
        let modal = egui::Modal::new(id)
            .area(area)
            .backdrop_color(egui::Color32::from_black_alpha(140))
            .frame(theme::sheet_frame());

        let response = modal.show(ctx, |ui| {
            ui.set_width(theme::SHEET_WIDTH);
            close_clicked = self.drag_handle_row(ui);

            egui::ScrollArea::vertical()
                .max_height(theme::SHEET_MAX_HEIGHT)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    self.icon_image(ui, texture);
                    ui.add_space(theme::SPACING_MD);

                    // Actions, centered
                    ui.horizontal(|ui| {
                        let row_w = 88.0 * 2.0 + theme::SPACING_LG;
                        ui.add_space(((ui.available_width() - row_w) / 2.0).max(0.0));
                        if icon_link(ui, egui_phosphor::regular::GITHUB_LOGO, "View on GitHub").clicked() {
                            action = Some(self.open_source(actions));
                        }
                        ui.add_space(theme::SPACING_LG);
                        if icon_link(ui, egui_phosphor::regular::SHARE_NETWORK, "Share").clicked() {
                            action = Some(self.share(actions));
                        }
                    });
                    ui.add_space(theme::SPACING_LG);

                    section_title(ui, "Drawable");
                    simple_list_row(ui, &self.presenter.source_identifier, OUTDATED_WARNING);
                    ui.add_space(theme::SPACING_LG);

                    section_title(ui, "Mapped components");
                    let last_index = self.presenter.groups.len().saturating_sub(1);
                    for (index, group) in self.presenter.groups.iter().enumerate() {
                        mapping_row(ui, group, index, last_index);
                    }
                    ui.add_space(theme::SPACING_LG);
                });
        });

        if close_clicked || response.should_close() {
            info!(drawable = %self.icon.drawable_name, "Icon info dismissed");
            is_popup_shown(false);
        }
        action
    }

    /// Top row: drag handle pill and a close button. Returns true on close.
    fn drag_handle_row(&self, ui: &mut egui::Ui) -> bool {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 24.0), egui::Sense::hover());
        ui.painter().rect_filled(
            egui::Rect::from_center_size(rect.center(), egui::vec2(32.0, 4.0)),
            2.0,
            theme::TEXT_DIM,
        );

        let close_rect = egui::Rect::from_center_size(
            egui::pos2(rect.right() - 12.0, rect.center().y),
            egui::vec2(24.0, 24.0),
        );
        let close = ui.interact(close_rect, close_button_id(), egui::Sense::click());
        let color = if close.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            theme::STATUS_ERROR
        } else {
            theme::TEXT_DIM
        };
        ui.painter().text(
            close_rect.center(),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::X,
            egui::FontId::proportional(16.0),
            color,
        );
        close.clicked()
    }

    fn icon_image(&self, ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>) {
        let size = egui::vec2(theme::SHEET_ICON_SIZE, theme::SHEET_ICON_SIZE);
        ui.vertical_centered(|ui| match texture {
            Some(tex) => {
                ui.add(
                    egui::Image::new(egui::load::SizedTexture::new(tex.id(), size))
                        .alt_text(&self.icon.drawable_name),
                );
            }
            None => {
                let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    self.placeholder,
                    egui::FontId::proportional(theme::SHEET_ICON_SIZE * 0.6),
                    theme::TEXT_PRIMARY,
                );
            }
        });
    }
}

/// One label and its component names. Rows of the list share rounded
/// outer corners at its ends and a thin gap in between.
fn mapping_row(ui: &mut egui::Ui, group: &GroupedMapping, index: usize, last_index: usize) {
    theme::list_row_frame(index == 0, index == last_index).show(ui, |ui| {
        ui.set_width(ui.available_width());
        let label = label_galley(ui, &group.label, ui.available_width());
        ui.add(egui::Label::new(label).selectable(true));
        egui::ScrollArea::horizontal()
            .id_salt(("mapping_row", index))
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    for name in &group.component_names {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(name)
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_MUTED),
                            )
                            .extend()
                            .selectable(true),
                        );
                    }
                });
            });
    });
    if index < last_index {
        ui.add_space(2.0);
    }
}

/// Group label laid out at `width`, wrapped to at most two rows and elided
fn label_galley(ui: &egui::Ui, text: &str, width: f32) -> std::sync::Arc<egui::Galley> {
    let mut job = egui::text::LayoutJob::single_section(
        text.to_owned(),
        egui::TextFormat::simple(egui::FontId::proportional(theme::FONT_BODY), theme::TEXT_PRIMARY),
    );
    job.wrap = egui::text::TextWrapping {
        max_width: width,
        max_rows: 2,
        break_anywhere: false,
        overflow_character: Some('…'),
    };
    ui.fonts(|f| f.layout_job(job))
}

impl App {
    pub(crate) fn render_icon_sheet(&mut self, ctx: &egui::Context) {
        let Some(icon_id) = self.icon_sheet.as_ref().map(|s| s.icon().id) else {
            return;
        };
        let icon_idx = self.catalog.icons.iter().position(|i| i.id == icon_id);
        let texture = icon_idx.and_then(|idx| self.icon_texture(ctx, idx));

        let Some(sheet) = self.icon_sheet.as_ref() else {
            return;
        };
        let actions = DesktopActions::new(ctx);
        let mut shown = true;
        let action = sheet.show(ctx, texture.as_ref(), &actions, |visible| shown = visible);

        if action == Some(SheetAction::Shared) {
            self.show_toast(format!("{}  Icon info copied to clipboard", egui_phosphor::regular::COPY));
        }
        if !shown {
            self.icon_sheet = None;
        }
    }
}
