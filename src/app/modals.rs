//! Settings modal and toast notification

use super::App;
use crate::theme;
use eframe::egui;
use tracing::info;

impl App {
    pub(crate) fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut pick_folder = false;
        let mut use_sample = false;

        let modal_response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::sheet_frame())
            .show(ctx, |ui| {
                ui.set_width(360.0);
                ui.add(
                    egui::Label::new(egui::RichText::new("Settings").size(theme::FONT_TITLE).strong())
                        .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                ui.label(egui::RichText::new("View").size(theme::FONT_LABEL).color(theme::ACCENT));
                if theme::settings_checkbox(ui, self.large_icons, "Large icons") {
                    self.large_icons = !self.large_icons;
                }
                ui.add_space(theme::SPACING_LG);

                ui.label(egui::RichText::new("Icon pack").size(theme::FONT_LABEL).color(theme::ACCENT));
                let current = self
                    .icon_pack_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "Built-in sample".to_owned());
                ui.add(egui::Label::new(egui::RichText::new(current).color(theme::TEXT_MUTED)).truncate());
                ui.add_space(theme::SPACING_SM);
                ui.horizontal(|ui| {
                    if ui
                        .add(theme::button_accent(format!("{}  Choose folder", egui_phosphor::regular::FOLDER_OPEN)))
                        .clicked()
                    {
                        pick_folder = true;
                    }
                    if self.icon_pack_dir.is_some() && ui.add(theme::button("Use sample")).clicked() {
                        use_sample = true;
                    }
                });
            });

        if pick_folder {
            if let Some(dir) = rfd::FileDialog::new()
                .set_title("Select icon pack folder (contains appfilter.xml)")
                .pick_folder()
            {
                info!(path = %dir.display(), "Icon pack folder selected");
                self.set_icon_pack_dir(Some(dir));
            }
        }
        if use_sample {
            self.set_icon_pack_dir(None);
        }
        if modal_response.should_close() {
            self.show_settings = false;
            self.save_settings();
        }
    }

    /// Bottom-right toast, 3s visible then fade, paused on hover
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect) else {
            return;
        };
        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        let alpha = if elapsed > visible_duration {
            ((total_duration - elapsed) / fade_duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin))
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme::BG_SURFACE.gamma_multiply(alpha))
                    .stroke(egui::Stroke::new(1.0, theme::ACCENT.gamma_multiply(0.4 * alpha)))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(msg).color(theme::TEXT_PRIMARY.gamma_multiply(alpha)));
                    });
            });

        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
