//! Reading photographs from disk and writing annotated results back.
//!
//! Only PNG and JPEG are accepted, decided by the file extension.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Formats accepted for both input and output.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

fn supported_format(path: &Path) -> Result<ImageFormat> {
    match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Jpeg)) => Ok(format),
        _ => Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Loads a PNG or JPEG file as 8-bit RGB.
///
/// Alpha channels are dropped and grayscale images are expanded to three channels.
pub fn load_rgb(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let format = supported_format(path)?;

    let io_error = |e: std::io::Error| Error::ImageLoad {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(e),
    };

    let image = image::ImageReader::open(path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)?
        .decode()
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %path.display(),
        ?format,
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "loaded image"
    );

    Ok(image.to_rgb8())
}

/// Saves an RGB image as PNG or JPEG, chosen by the extension of `path`.
pub fn save_rgb(image: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = supported_format(path)?;

    image
        .save_with_format(path, format)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), ?format, "saved image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn rejects_unsupported_extensions() {
        for name in ["web.gif", "web.bmp", "web", "web.txt"] {
            let err = load_rgb(name).unwrap_err();
            assert!(matches!(err, Error::UnsupportedFormat { .. }), "{name}: {err:?}");
            assert!(err.to_string().ends_with("(expected png, jpg or jpeg)"));
        }

        let image = RgbImage::new(2, 2);
        let err = save_rgb(&image, "out.tiff").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn accepts_upper_case_extensions() {
        assert_eq!(supported_format(Path::new("a.JPG")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(supported_format(Path::new("a.jpeg")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(supported_format(Path::new("a.Png")).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_rgb("/nonexistent/web.png").unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
        assert!(err.to_string().contains("/nonexistent/web.png"));
    }

    #[test]
    fn png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("web.png");

        let mut image = RgbImage::from_pixel(5, 3, Rgb([10, 20, 30]));
        image.put_pixel(4, 2, Rgb([250, 0, 125]));

        save_rgb(&image, &path).unwrap();
        assert_eq!(load_rgb(&path).unwrap(), image);
    }

    #[test]
    fn garbage_with_png_extension_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = load_rgb(&path).unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }
}
