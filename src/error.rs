//! Error types for loading and saving images.
//!
//! The analysis itself cannot fail; only the boundary with the file system does.

use std::path::PathBuf;

use thiserror::Error;

use crate::loader::SUPPORTED_EXTENSIONS;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be opened or decoded.
    #[error("failed to load image {}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The annotated image could not be encoded or written.
    #[error("failed to save image {}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Only PNG and JPEG files are accepted.
    #[error(
        "unsupported image format for {} (expected {})",
        path.display(),
        expected_formats()
    )]
    UnsupportedFormat { path: PathBuf },
}

fn expected_formats() -> String {
    match SUPPORTED_EXTENSIONS.split_last() {
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
        None => String::new(),
    }
}
