//! Incremental construction of overlay markup

use crate::config::HtmlConfig;
use crate::geometry::{BoundingBox, Point};

/// Build an HTML fragment piece by piece
///
/// Every element is positioned with inline styles. Lengths for boxes, crops
/// and images are truncated to whole pixels; marker positions keep their
/// fractional part.
pub struct HtmlBuilder<'a> {
    config: &'a HtmlConfig,
    parts: Vec<String>,
    open: usize,
}

impl<'a> HtmlBuilder<'a> {
    /// Create a new builder
    pub fn new(config: &'a HtmlConfig) -> Self {
        Self {
            config,
            parts: vec![],
            open: 0,
        }
    }

    /// Open a relatively positioned wrapper
    ///
    /// `style` is the raw declaration list, e.g. `position:relative;`.
    pub fn open_div(&mut self, style: &str) {
        self.parts.push(format!(r#"<div style="{}">"#, style));
        self.open += 1;
    }

    /// Open a clipping container of the given display size
    pub fn open_crop(&mut self, width: f64, height: f64) {
        self.open_div(&format!(
            "overflow:hidden; display:inline-block; position:relative; width:{}px; height:{}px;",
            px(width),
            px(height)
        ));
    }

    /// Close the innermost open container
    pub fn close_div(&mut self) {
        self.open = self.open.saturating_sub(1);
        self.parts.push("</div>".to_string());
    }

    /// Add an unstyled image
    pub fn add_image(&mut self, src: &str) {
        self.parts
            .push(format!(r#"<img src="{}" />"#, escape_attr(src)));
    }

    /// Add an image scaled to `height` with no offset
    pub fn add_scaled_image(&mut self, src: &str, height: f64) {
        self.parts.push(format!(
            r#"<img src="{}" style="height:{}px" />"#,
            escape_attr(src),
            px(height)
        ));
    }

    /// Add an image scaled to `height` and shifted so `offset` lands on the
    /// container origin
    pub fn add_shifted_image(&mut self, src: &str, height: f64, offset: Point) {
        self.parts.push(format!(
            r#"<img src="{}" style="height:{}px; margin:{}px 0 0 {}px;"/>"#,
            escape_attr(src),
            px(height),
            -px(offset.y),
            -px(offset.x)
        ));
    }

    /// Add a bordered rectangle, already in display coordinates
    pub fn add_box(&mut self, bounds: BoundingBox, color: &str) {
        let color = escape_attr(self.config.color(color));
        self.parts.push(format!(
            r#"<div style="position:absolute; border:{}px solid {}; color:{}; left:{}px; top:{}px; width:{}px; height:{}px;"></div>"#,
            self.config.border_width,
            color,
            color,
            px(bounds.x),
            px(bounds.y),
            px(bounds.width),
            px(bounds.height)
        ));
    }

    /// Add a square marker with its top-left corner at `at`
    pub fn add_marker(&mut self, at: Point, color: &str) {
        let color = escape_attr(self.config.color(color));
        self.parts.push(format!(
            r#"<div style="position:absolute; top:{}px; left:{}px; color:{}; background-color:{}; width:{}px; height:{}px;"></div>"#,
            at.y, at.x, color, color, self.config.marker_size, self.config.marker_size
        ));
    }

    /// Number of containers opened and not yet closed
    pub fn depth(&self) -> usize {
        self.open
    }

    /// Join all pieces with `separator`, closing any open containers first
    pub fn build(mut self, separator: &str) -> String {
        while self.open > 0 {
            self.close_div();
        }
        self.parts.join(separator)
    }
}

/// Truncate a length to whole pixels, toward zero
fn px(value: f64) -> i64 {
    value.trunc() as i64
}

/// Escape special characters for a double-quoted attribute value
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
