//! Catmull-Rom spline accumulator.

use crate::path::Path;

const DEFAULT_SMOOTHNESS: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing fed yet.
    Empty,
    /// One point fed; not enough for a segment.
    First,
    /// Each new point closes the segment ending at the window's last point.
    Curving,
    /// `end()` was called; the next point resumes with a line.
    Ended,
}

/// Smooth curve through every fed point.
///
/// Keeps the last three points `p0, p1, p2`. When a new point `p` arrives the
/// segment ending at `p2` is emitted as a cubic Bézier with control points
/// `(-p0 + T·p1 + p2) / T` and `(p1 + T·p2 - p) / T`, where `T` is twelve
/// times the smoothness.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRomCurve {
    tension: f64,
    window: [(f64, f64); 3],
    phase: Phase,
}

impl CatmullRomCurve {
    /// `smoothness` is clamped to `[0, 1]`; missing, NaN or non-positive
    /// values use 0.5.
    pub fn new(smoothness: Option<f64>) -> Self {
        let t = match smoothness {
            Some(t) if t > 0.0 => t.min(1.0),
            _ => DEFAULT_SMOOTHNESS,
        };
        CatmullRomCurve {
            tension: t * 12.0,
            window: [(0.0, 0.0); 3],
            phase: Phase::Empty,
        }
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }

    pub fn point(&mut self, path: &mut Path, x: f64, y: f64) {
        match self.phase {
            Phase::Empty | Phase::Ended => {
                if self.phase == Phase::Empty {
                    path.move_to(x, y);
                } else {
                    path.line_to(x, y);
                }
                self.window[2] = (x, y);
                self.phase = Phase::First;
            }
            Phase::First => self.phase = Phase::Curving,
            Phase::Curving => {
                let t = self.tension;
                let [(x0, y0), (x1, y1), (x2, y2)] = self.window;
                path.bezier_curve(
                    (-x0 + t * x1 + x2) / t,
                    (-y0 + t * y1 + y2) / t,
                    (x1 + t * x2 - x) / t,
                    (y1 + t * y2 - y) / t,
                    x2,
                    y2,
                );
            }
        }
        self.window = [self.window[1], self.window[2], (x, y)];
    }

    /// Close the final segment by replaying the last point.
    pub fn end(&mut self, path: &mut Path) {
        if self.phase == Phase::Curving {
            let (x, y) = self.window[2];
            self.point(path, x, y);
        }
        if self.phase != Phase::Empty {
            self.phase = Phase::Ended;
        }
    }
}

impl Default for CatmullRomCurve {
    fn default() -> Self {
        Self::new(None)
    }
}
