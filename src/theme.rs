//! Centralized theme constants for Lawnicons Viewer
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x11, 0x13, 0x18); // app background
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x1b, 0x1d, 0x24); // cards, tiles
pub const BG_INPUT: Color32 = Color32::from_rgb(0x16, 0x18, 0x1e); // search field
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x25, 0x28, 0x31); // list rows
pub const BG_SHEET: Color32 = Color32::from_rgb(0x1a, 0x1c, 0x22); // info sheet

// =============================================================================
// COLORS - Accent
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xaa, 0xc7, 0xff); // primary
pub const ACCENT_CONTAINER: Color32 = Color32::from_rgb(0x28, 0x47, 0x77);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xe2, 0xe2, 0xe9); // on-background
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xc4, 0xc6, 0xd0); // on-surface-variant
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x8e, 0x90, 0x99);

// =============================================================================
// COLORS - Borders / Status
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x2c, 0x2f, 0x38);
pub const DIVIDER: Color32 = Color32::from_rgb(0x33, 0x36, 0x40);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf2, 0xb8, 0xb5);

// =============================================================================
// BUTTONS
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x36, 0x40);
pub const BTN_ACCENT: Color32 = ACCENT_CONTAINER;

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const SHEET_WIDTH: f32 = 480.0;
pub const SHEET_MAX_HEIGHT: f32 = 640.0;
pub const SHEET_ICON_SIZE: f32 = 200.0;
pub const TILE_SMALL: f32 = 72.0;
pub const TILE_LARGE: f32 = 112.0;

// =============================================================================
// CORNER RADIUS / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 16.0;
pub const RADIUS_ROW_OUTER: u8 = 16;
pub const RADIUS_ROW_INNER: u8 = 4;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 16.0;
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let widget = |bg: Color32, fg: Color32| egui::style::WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: egui::Stroke::NONE,
        fg_stroke: egui::Stroke::new(1.0, fg),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_SHEET,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_CONTAINER,
            stroke: egui::Stroke::new(1.0, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget(BG_ELEVATED, TEXT_PRIMARY),
            inactive: widget(BG_ELEVATED, TEXT_MUTED),
            hovered: widget(BG_SURFACE, TEXT_PRIMARY),
            active: widget(ACCENT_CONTAINER, TEXT_PRIMARY),
            open: widget(BG_SURFACE, TEXT_PRIMARY),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(1.0, BORDER_SUBTLE),
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn sheet_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_SHEET)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_LG)
}

pub fn search_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .corner_radius(24.0)
        .inner_margin(egui::Margin::symmetric(14, 8))
}

/// Grouped list row: outer corners rounded only at the ends of the group
pub fn list_row_frame(first: bool, last: bool) -> egui::Frame {
    let top = if first { RADIUS_ROW_OUTER } else { RADIUS_ROW_INNER };
    let bottom = if last { RADIUS_ROW_OUTER } else { RADIUS_ROW_INNER };
    egui::Frame::new()
        .fill(BG_SURFACE)
        .corner_radius(egui::CornerRadius {
            nw: top,
            ne: top,
            sw: bottom,
            se: bottom,
        })
        .inner_margin(egui::Margin::symmetric(16, 12))
}

// =============================================================================
// HELPER - Buttons
// =============================================================================
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(ACCENT))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Checkbox row used in the settings modal. Returns true if toggled.
pub fn settings_checkbox(ui: &mut egui::Ui, checked: bool, label: &str) -> bool {
    let (row_rect, row_resp) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 20.0), egui::Sense::click());
    let painter = ui.painter();
    let cb_size = 16.0;
    let cb_rect = egui::Rect::from_min_size(
        egui::pos2(row_rect.min.x, row_rect.center().y - cb_size / 2.0),
        egui::vec2(cb_size, cb_size),
    );
    let stroke_color = if checked { ACCENT } else { DIVIDER };
    painter.rect_stroke(cb_rect, 3.0, egui::Stroke::new(1.5, stroke_color), egui::StrokeKind::Inside);
    if checked {
        painter.rect_filled(cb_rect.shrink(3.0), 2.0, ACCENT);
    }
    painter.text(
        egui::pos2(cb_rect.max.x + 8.0, row_rect.center().y),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(FONT_BODY),
        TEXT_PRIMARY,
    );
    row_resp.clicked()
}
