//! App module - contains the main application state and logic

mod filters;
mod modals;
mod sheet;
mod textures;
mod views;

use sheet::IconInfoSheet;

use crate::catalog::Catalog;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) catalog: Catalog,
    pub(crate) filtered_indices: Vec<usize>,
    pub(crate) search_query: String,
    pub(crate) focus_search: bool,
    // Icon textures keyed by icon id; None caches a failed render
    pub(crate) textures: HashMap<usize, Option<egui::TextureHandle>>,
    // Open info sheet, built once per presentation
    pub(crate) icon_sheet: Option<IconInfoSheet>,
    // Settings
    pub(crate) show_settings: bool,
    pub(crate) large_icons: bool,
    pub(crate) icon_pack_dir: Option<PathBuf>,
    pub(crate) catalog_error: Option<String>,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let icon_pack_dir = settings.icon_pack_path();
        let (catalog, catalog_error) = load_catalog_or_sample(icon_pack_dir.as_deref());

        let mut app = Self {
            catalog,
            filtered_indices: Vec::new(),
            search_query: String::new(),
            focus_search: false,
            textures: HashMap::new(),
            icon_sheet: None,
            show_settings: false,
            large_icons: settings.large_icons,
            icon_pack_dir,
            catalog_error,
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        };
        app.apply_filters();
        app
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            icon_pack_dir: self
                .icon_pack_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            large_icons: self.large_icons,
        };
        settings.save(&self.data_dir);
    }

    /// Switch to another icon pack directory, dropping everything derived
    /// from the previous catalog
    pub fn set_icon_pack_dir(&mut self, dir: Option<PathBuf>) {
        let (catalog, error) = load_catalog_or_sample(dir.as_deref());
        self.catalog = catalog;
        self.catalog_error = error;
        self.icon_pack_dir = dir;
        self.textures.clear();
        self.icon_sheet = None;
        self.apply_filters();
    }

    /// Present the info sheet for a catalog icon
    pub fn open_icon_sheet(&mut self, icon_idx: usize) {
        if let Some(icon) = self.catalog.icons.get(icon_idx) {
            info!(drawable = %icon.drawable_name, "Opening icon info");
            let placeholder = self.catalog.placeholder_glyph(icon);
            self.icon_sheet = Some(IconInfoSheet::new(icon.clone(), placeholder));
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }
}

/// Load the configured icon pack, falling back to the built-in sample.
/// The second value is a user-facing error when the fallback was taken.
fn load_catalog_or_sample(dir: Option<&Path>) -> (Catalog, Option<String>) {
    let Some(dir) = dir else {
        return (Catalog::sample(), None);
    };
    match Catalog::load(dir) {
        Ok(catalog) => (catalog, None),
        Err(e) => {
            warn!(error = %e, path = %dir.display(), "Failed to load icon pack, using sample catalog");
            (Catalog::sample(), Some(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_directory_uses_sample_without_error() {
        let (catalog, error) = load_catalog_or_sample(None);
        assert!(!catalog.icons.is_empty());
        assert!(error.is_none());
    }

    #[test]
    fn broken_directory_falls_back_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let (catalog, error) = load_catalog_or_sample(Some(dir.path()));
        assert_eq!(catalog.icons.len(), Catalog::sample().icons.len());
        assert!(error.unwrap().contains("appfilter"));
    }
}
