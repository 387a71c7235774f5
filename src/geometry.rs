//! Geometric value types for overlays

/// A 2D point in image pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate so that `origin` becomes (0, 0)
    pub fn relative_to(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    /// Scale both coordinates by `ratio`
    pub fn scaled(&self, ratio: f64) -> Point {
        Point::new(self.x * ratio, self.y * ratio)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Scale position and size uniformly by `ratio`
    pub fn scaled(&self, ratio: f64) -> BoundingBox {
        BoundingBox::new(
            self.x * ratio,
            self.y * ratio,
            self.width * ratio,
            self.height * ratio,
        )
    }
}

impl From<(f64, f64, f64, f64)> for BoundingBox {
    fn from((x, y, width, height): (f64, f64, f64, f64)) -> Self {
        Self::new(x, y, width, height)
    }
}

/// A point of interest with an optional color
///
/// Landmarks built from `(x, y)` pairs carry no color and pick up whatever
/// default the caller supplies at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    pub point: Point,
    pub color: Option<String>,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            point: Point::new(x, y),
            color: None,
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The landmark's own color, or `default` when unset
    pub fn color_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.color.as_deref().unwrap_or(default)
    }
}

impl From<(f64, f64)> for Landmark {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, &str)> for Landmark {
    fn from((x, y, color): (f64, f64, &str)) -> Self {
        Self::new(x, y).with_color(color)
    }
}

impl From<(f64, f64, String)> for Landmark {
    fn from((x, y, color): (f64, f64, String)) -> Self {
        Self::new(x, y).with_color(color)
    }
}

impl From<Point> for Landmark {
    fn from(point: Point) -> Self {
        Self { point, color: None }
    }
}
