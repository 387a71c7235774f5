//! Error types for snippet generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating markup
#[derive(Debug, Error)]
pub enum HtmlError {
    /// The image could not be opened or its header could not be decoded
    #[error("cannot read dimensions of '{}': {source}", path.display())]
    ImageSize {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl HtmlError {
    /// Create an image size error for the given path
    pub fn image_size(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::ImageSize {
            path: path.into(),
            source,
        }
    }

    /// Path of the image involved
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ImageSize { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_size_display_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = HtmlError::image_size("faces/001.jpg", image::ImageError::IoError(io));
        let msg = err.to_string();
        assert!(msg.contains("faces/001.jpg"));
        assert!(msg.contains("gone"));
        assert_eq!(err.path(), std::path::Path::new("faces/001.jpg"));
    }
}
