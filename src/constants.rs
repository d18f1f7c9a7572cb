//! Application constants and configuration

pub const GITHUB_URL: &str = "https://github.com/LawnchairLauncher/lawnicons";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Lawnicons Viewer";

/// Suffix carried by generated drawable names, absent from the SVG sources
pub const DRAWABLE_SUFFIX: &str = "_foreground";

/// MIME type handed to the share facility
pub const SHARE_MIME_TYPE: &str = "text/plain";

pub const APPFILTER_FILE: &str = "appfilter.xml";
pub const SVG_DIR: &str = "svgs";

/// Edge length (px) icons are rasterized at before upload
pub const ICON_RASTER_SIZE: u32 = 256;
