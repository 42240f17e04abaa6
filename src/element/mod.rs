//! Plot decorations: axes and text helpers.

pub mod axis;
pub mod text;

pub use axis::{Axis, AxisConfig, AxisPosition, AxisTick};
pub use text::{DominantBaseline, TextAnchor, escape_xml};

/// Rectangle in drawing-area pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Area anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Bounds::from_points(0.0, 0.0, width, height)
    }

    /// Create bounds from corner points.
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Bounds {
            x_min: x1.min(x2),
            x_max: x1.max(x2),
            y_min: y1.min(y2),
            y_max: y1.max(y2),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::from_size(500.0, 500.0)
    }
}
