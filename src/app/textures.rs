//! Icon texture loading (SVG source -> tinted egui texture)

use super::App;
use crate::constants::ICON_RASTER_SIZE;
use crate::error::CatalogError;
use crate::theme;
use crate::utils::{rasterize_svg, tint_alpha_mask};
use eframe::egui;
use tracing::{debug, warn};

impl App {
    /// Texture for an icon, rendered on first use. Missing or broken SVGs are
    /// cached as `None` so they are not retried every frame.
    pub fn icon_texture(&mut self, ctx: &egui::Context, icon_idx: usize) -> Option<egui::TextureHandle> {
        let icon = self.catalog.icons.get(icon_idx)?;
        if let Some(cached) = self.textures.get(&icon.id) {
            return cached.clone();
        }

        let texture = self.catalog.svg_path(icon).and_then(|path| {
            let result = std::fs::read(&path)
                .map_err(|source| CatalogError::Io { path: path.clone(), source })
                .and_then(|data| rasterize_svg(&data, ICON_RASTER_SIZE));
            match result {
                Ok((mut pixels, w, h)) => {
                    let fg = theme::TEXT_PRIMARY;
                    tint_alpha_mask(&mut pixels, [fg.r(), fg.g(), fg.b()]);
                    debug!(path = %path.display(), "Icon rasterized");
                    Some(ctx.load_texture(
                        format!("icon_{}", icon.id),
                        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    warn!(error = %e, drawable = %icon.drawable_name, "Failed to load icon");
                    None
                }
            }
        });

        let id = icon.id;
        self.textures.insert(id, texture.clone());
        texture
    }
}
