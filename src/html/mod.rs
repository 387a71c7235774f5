//! HTML overlay generation
//!
//! Crops and resizes are simulated with CSS: a clipping container sized to
//! the display crop holds the full image, scaled and shifted with negative
//! margins. Boxes and landmark markers are absolutely positioned on top.

pub mod builder;
pub mod overlay;

pub use builder::HtmlBuilder;
pub use overlay::{crop_ratio, HtmlRenderer};
