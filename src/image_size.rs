//! Natural image dimensions

use std::path::Path;

use crate::error::HtmlError;

/// Pixel dimensions of an image on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Read the dimensions of the image at `path`
    ///
    /// Only the header is decoded. Fails if the file is missing, unreadable,
    /// or not in a format the `image` crate recognizes.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, HtmlError> {
        let path = path.as_ref();
        let (width, height) =
            image::image_dimensions(path).map_err(|e| HtmlError::image_size(path, e))?;
        log::trace!("{}: {}x{}", path.display(), width, height);
        Ok(Self::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_png_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbImage::new(30, 12).save(&path).unwrap();

        let size = ImageSize::read(&path).unwrap();
        assert_eq!(size, ImageSize::new(30, 12));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = ImageSize::read(&path).unwrap_err();
        assert!(matches!(err, HtmlError::ImageSize { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_read_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(ImageSize::read(&path).is_err());
    }
}
