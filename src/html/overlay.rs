//! Snippet operations: boxes, landmarks, crops and whole images

use std::path::Path;

use crate::config::HtmlConfig;
use crate::error::HtmlError;
use crate::geometry::{BoundingBox, Landmark, Point};
use crate::image_size::ImageSize;

use super::HtmlBuilder;

/// Produces overlay snippets with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: HtmlConfig,
}

impl HtmlRenderer {
    pub fn new(config: HtmlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HtmlConfig {
        &self.config
    }

    /// A bordered rectangle scaled by `ratio` in both position and size
    ///
    /// `ratio` defaults to 1.0 and `color` to the configured default.
    pub fn bounding_box(
        &self,
        bounds: BoundingBox,
        ratio: Option<f64>,
        color: Option<&str>,
    ) -> String {
        let color = color.unwrap_or(self.config.default_color.as_str());
        let mut builder = HtmlBuilder::new(&self.config);
        builder.add_box(bounds.scaled(ratio.unwrap_or(1.0)), color);
        builder.build("")
    }

    /// A square marker centred on `at`
    pub fn landmark(&self, at: Point, color: &str) -> String {
        let mut builder = HtmlBuilder::new(&self.config);
        builder.add_marker(self.marker_origin(at), color);
        builder.build("")
    }

    /// An unscaled image with a single marker at `at`
    ///
    /// Unlike [`landmark`](Self::landmark), the marker's top-left corner sits
    /// on `at`. The image is not opened; `src` is emitted as is.
    pub fn landmark_on_image(&self, at: Point, src: &str, color: &str) -> String {
        let mut builder = HtmlBuilder::new(&self.config);
        builder.open_div("position:relative;");
        builder.add_image(src);
        builder.add_marker(at, color);
        builder.build("")
    }

    /// Crop `image` to `crop` and scale it to `max_height` display pixels
    ///
    /// With no `max_height` the crop keeps its natural size.
    pub fn crop_to_bb(
        &self,
        crop: BoundingBox,
        image: impl AsRef<Path>,
        max_height: Option<f64>,
    ) -> Result<String, HtmlError> {
        let mut builder = HtmlBuilder::new(&self.config);
        self.open_crop(&mut builder, crop, image.as_ref(), max_height)?;
        Ok(builder.build(""))
    }

    /// Like [`crop_to_bb`](Self::crop_to_bb), with landmarks drawn on the crop
    ///
    /// Landmark coordinates are in full-image pixels. Landmarks without their
    /// own color use `color`.
    pub fn landmarks_on_crop<I, L>(
        &self,
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
        let mut builder = HtmlBuilder::new(&self.config);
        let ratio = self.open_crop(&mut builder, crop, image.as_ref(), max_height)?;
        for landmark in landmarks.into_iter().map(Into::<Landmark>::into) {
            let at = landmark.point.relative_to(crop.origin()).scaled(ratio);
            builder.add_marker(self.marker_origin(at), landmark.color_or(color));
        }
        Ok(builder.build(""))
    }

    /// The whole image scaled to `max_height`, with bounding boxes on top
    ///
    /// `colors` pairs up with `boxes` by position. Boxes past the end of
    /// `colors` (all of them, when it is empty) use the default color.
    pub fn bbs_for_image<I, B>(
        &self,
        image: impl AsRef<Path>,
        boxes: I,
        max_height: Option<f64>,
        colors: &[&str],
    ) -> Result<String, HtmlError>
    where
        I: IntoIterator<Item = B>,
        B: Into<BoundingBox>,
    {
        let image = image.as_ref();
        let size = ImageSize::read(image)?;
        let natural = f64::from(size.height);
        let display_height = target_height(max_height).unwrap_or(natural);
        let ratio = display_height / natural;
        log::debug!("{}: whole-image ratio {}", image.display(), ratio);

        let boxes: Vec<BoundingBox> = boxes.into_iter().map(Into::into).collect();
        if !colors.is_empty() && colors.len() < boxes.len() {
            log::warn!(
                "{}: {} colors for {} boxes, using '{}' for the rest",
                image.display(),
                colors.len(),
                boxes.len(),
                self.config.default_color
            );
        }

        let mut builder = HtmlBuilder::new(&self.config);
        builder.open_div("position:relative");
        builder.add_scaled_image(&image.to_string_lossy(), display_height);
        for (i, bounds) in boxes.iter().enumerate() {
            let color = colors
                .get(i)
                .copied()
                .unwrap_or(self.config.default_color.as_str());
            builder.add_box(bounds.scaled(ratio), color);
        }
        Ok(builder.build("\n"))
    }

    /// Open the clipping container and shifted image for a crop
    ///
    /// Returns the display ratio; the container is left open.
    fn open_crop(
        &self,
        builder: &mut HtmlBuilder<'_>,
        crop: BoundingBox,
        image: &Path,
        max_height: Option<f64>,
    ) -> Result<f64, HtmlError> {
        let size = ImageSize::read(image)?;
        let ratio = crop_ratio(&crop, max_height);
        log::debug!("{}: crop ratio {}", image.display(), ratio);

        let display_height = target_height(max_height).unwrap_or(crop.height);
        builder.open_crop(crop.width * ratio, display_height);
        builder.add_shifted_image(
            &image.to_string_lossy(),
            f64::from(size.height) * ratio,
            crop.origin().scaled(ratio),
        );
        Ok(ratio)
    }

    fn marker_origin(&self, center: Point) -> Point {
        let half = self.config.marker_size / 2.0;
        Point::new(center.x - half, center.y - half)
    }
}

/// Display ratio for a crop shown at `max_height` pixels tall
///
/// `None` and `Some(0.0)` both mean "natural size" and give 1.0.
pub fn crop_ratio(crop: &BoundingBox, max_height: Option<f64>) -> f64 {
    target_height(max_height)
        .map(|target| target / crop.height)
        .unwrap_or(1.0)
}

/// A zero target height counts as unset
fn target_height(max_height: Option<f64>) -> Option<f64> {
    max_height.filter(|h| *h != 0.0)
}
