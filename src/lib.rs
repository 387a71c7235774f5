//! Landmark HTML - HTML snippets for visualizing landmarks and bounding boxes
//!
//! Every function returns a markup fragment meant to be embedded in a larger
//! page. Image files are only opened to read their dimensions; the emitted
//! `src` attributes use the paths exactly as given, so run from the directory
//! the page will be saved in when using relative paths.
//!
//! # Example
//!
//! ```rust
//! use landmark_html::{bounding_box, BoundingBox};
//!
//! let html = bounding_box(BoundingBox::new(0.0, 0.0, 50.0, 50.0), Some(0.5), Some("red"));
//! assert!(html.contains("width:25px"));
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod html;
pub mod image_size;

pub use config::{ConfigError, HtmlConfig, Palette, DEFAULT_COLOR, DEFAULT_MARKER_SIZE};
pub use error::HtmlError;
pub use geometry::{BoundingBox, Landmark, Point};
pub use html::{crop_ratio, HtmlBuilder, HtmlRenderer};
pub use image_size::ImageSize;

use std::path::Path;

/// A bordered rectangle scaled by `ratio` (default 1.0), drawn in `color`
/// (default green)
pub fn bounding_box(bounds: BoundingBox, ratio: Option<f64>, color: Option<&str>) -> String {
    HtmlRenderer::default().bounding_box(bounds, ratio, color)
}

/// A marker centred on (`x`, `y`)
pub fn landmark(x: f64, y: f64, color: &str) -> String {
    HtmlRenderer::default().landmark(Point::new(x, y), color)
}

/// An image with one marker, its top-left corner at (`x`, `y`)
pub fn landmark_on_image(x: f64, y: f64, src: &str, color: &str) -> String {
    HtmlRenderer::default().landmark_on_image(Point::new(x, y), src, color)
}

/// Crop `image` to `crop`, optionally scaled to `max_height` pixels tall
///
/// # Example
///
/// ```no_run
/// use landmark_html::{crop_to_bb, BoundingBox};
///
/// let html = crop_to_bb(BoundingBox::new(10.0, 20.0, 100.0, 50.0), "faces/001.jpg", Some(100.0))?;
/// # Ok::<(), landmark_html::HtmlError>(())
/// ```
pub fn crop_to_bb(
    crop: BoundingBox,
    image: impl AsRef<Path>,
    max_height: Option<f64>,
) -> Result<String, HtmlError> {
    HtmlRenderer::default().crop_to_bb(crop, image, max_height)
}

/// A crop with landmarks drawn on it
///
/// Landmarks may be `(x, y)` pairs, which take `color`, or `(x, y, color)`
/// triples.
pub fn landmarks_on_crop<I, L>(
    landmarks: I,
    crop: BoundingBox,
    image: impl AsRef<Path>,
    max_height: Option<f64>,
    color: &str,
) -> Result<String, HtmlError>
where
    I: IntoIterator<Item = L>,
    L: Into<Landmark>,
{
    HtmlRenderer::default().landmarks_on_crop(landmarks, crop, image, max_height, color)
}

/// A whole image with bounding boxes, optionally scaled to `max_height`
///
/// An empty `colors` slice draws every box in the default color.
pub fn bbs_for_image<I, B>(
    image: impl AsRef<Path>,
    boxes: I,
    max_height: Option<f64>,
    colors: &[&str],
) -> Result<String, HtmlError>
where
    I: IntoIterator<Item = B>,
    B: Into<BoundingBox>,
{
    HtmlRenderer::default().bbs_for_image(image, boxes, max_height, colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_offsets_half_marker() {
        let html = landmark(10.0, 20.0, "red");
        assert!(html.contains("top:16px; left:6px;"));
    }

    #[test]
    fn test_landmark_keeps_fraction() {
        let html = landmark(5.5, 4.0, "red");
        assert!(html.contains("top:0px; left:1.5px;"));
    }

    #[test]
    fn test_landmark_on_image_is_not_centred() {
        let html = landmark_on_image(10.0, 20.0, "a.png", "red");
        assert!(html.contains("top:20px; left:10px;"));
    }

    #[test]
    fn test_bounding_box_defaults() {
        let html = bounding_box(BoundingBox::new(4.0, 5.0, 6.0, 7.0), None, None);
        assert!(html.contains("border:2px solid green; color:green; left:4px; top:5px; width:6px; height:7px;"));
    }

    #[test]
    fn test_bounding_box_truncates() {
        let html = bounding_box(
            BoundingBox::new(1.0, 1.0, 3.0, 3.0),
            Some(1.3),
            Some(DEFAULT_COLOR),
        );
        // 1.3 -> 1, 3.9 -> 3
        assert!(html.contains("left:1px; top:1px; width:3px; height:3px;"));
    }

    #[test]
    fn test_missing_image_error() {
        let result = bbs_for_image("does/not/exist.png", [(0.0, 0.0, 1.0, 1.0)], None, &[]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("does/not/exist.png"));
    }
}
