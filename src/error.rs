//! Error types for catalog loading and icon rasterization

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The icon pack directory has no appfilter.xml
    #[error("no appfilter found at {0}")]
    MissingAppfilter(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed appfilter at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("failed to render svg: {0}")]
    Svg(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
