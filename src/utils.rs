//! Utility functions

use crate::constants::APP_NAME;
use crate::error::{CatalogError, CatalogResult};
use std::path::PathBuf;

// Window/taskbar icon: rounded tile with a stylised glyph
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="14" fill="#18181b"/><circle cx="32" cy="32" r="16" fill="none" stroke="#2dd4bf" stroke-width="5"/><circle cx="32" cy="32" r="5" fill="#ffffff"/></svg>"##;

/// Rasterize SVG source into a square RGBA buffer (straight alpha).
pub fn rasterize_svg(data: &[u8], size: u32) -> CatalogResult<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_data(data, &resvg::usvg::Options::default())
        .map_err(|e| CatalogError::Svg(e.to_string()))?;
    let svg_size = tree.size();
    let scale = (size as f32 / svg_size.width()).min(size as f32 / svg_size.height());
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| CatalogError::Svg(format!("invalid raster size {size}")))?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok((premul_to_straight(&pixmap), size, size))
}

/// Rasterize the app icon to a square image (for window/taskbar icons).
pub fn rasterize_app_icon(size: u32) -> CatalogResult<(Vec<u8>, u32, u32)> {
    rasterize_svg(ICON_SVG.as_bytes(), size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Recolor every pixel to `rgb`, keeping its alpha. Icons are monochrome
/// shapes, so the alpha channel carries the whole glyph.
pub fn tint_alpha_mask(rgba: &mut [u8], rgb: [u8; 3]) {
    for px in rgba.chunks_exact_mut(4) {
        px[..3].copy_from_slice(&rgb);
    }
}

/// App data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterizes_square_svg() {
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10" fill="#000"/></svg>"##;
        let (pixels, w, h) = rasterize_svg(svg, 16).unwrap();
        assert_eq!((w, h), (16, 16));
        assert_eq!(pixels.len(), 16 * 16 * 4);
        assert_eq!(pixels[3], 255);
    }

    #[test]
    fn invalid_svg_is_an_error() {
        assert!(matches!(rasterize_svg(b"not svg", 16), Err(CatalogError::Svg(_))));
    }

    #[test]
    fn app_icon_renders() {
        assert!(rasterize_app_icon(32).is_ok());
    }

    #[test]
    fn tint_keeps_alpha() {
        let mut px = vec![0, 0, 0, 200, 10, 20, 30, 0];
        tint_alpha_mask(&mut px, [255, 254, 253]);
        assert_eq!(px, [255, 254, 253, 200, 255, 254, 253, 0]);
    }
}
