use crate::path::Path;

/// Joins consecutive points with straight lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearCurve {
    started: bool,
}

impl LinearCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first point moves, every later point draws a line.
    pub fn point(&mut self, path: &mut Path, x: f64, y: f64) {
        if self.started {
            path.line_to(x, y);
        } else {
            path.move_to(x, y);
            self.started = true;
        }
    }

    pub fn end(&mut self, _path: &mut Path) {}
}
