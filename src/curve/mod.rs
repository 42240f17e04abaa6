//! Curve generators: stateful point-stream consumers writing into a [`Path`].
//!
//! A [`Curve`] is created per render, fed points one at a time with
//! [`Curve::point`], finished with [`Curve::end`] and then dropped.

mod catmull_rom;
mod linear;

pub use catmull_rom::CatmullRomCurve;
pub use linear::LinearCurve;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::error::PlotError;
use crate::path::Path;

/// Interpolation used to join consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveKind {
    #[default]
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "catmull-rom", alias = "catmull")]
    CatmullRom,
}

impl FromStr for CurveKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(CurveKind::Linear),
            "catmull" | "catmull-rom" => Ok(CurveKind::CatmullRom),
            other => Err(PlotError::InvalidConfig(format!(
                "unknown curve '{}' (expected linear, catmull or catmull-rom)",
                other
            ))),
        }
    }
}

// Listed by hand so the schema accepts the "catmull" alias.
impl JsonSchema for CurveKind {
    fn schema_name() -> Cow<'static, str> {
        "CurveKind".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Interpolation used to join consecutive points.",
            "type": "string",
            "enum": ["linear", "catmull", "catmull-rom"]
        })
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKind::Linear => f.write_str("linear"),
            CurveKind::CatmullRom => f.write_str("catmull-rom"),
        }
    }
}

/// Per-kind accumulator state.
#[derive(Debug, Clone, PartialEq)]
enum CurveState {
    Linear(LinearCurve),
    CatmullRom(CatmullRomCurve),
}

/// A curve generator bound to the path it writes into.
#[derive(Debug)]
pub struct Curve<'p> {
    path: &'p mut Path,
    state: CurveState,
}

impl<'p> Curve<'p> {
    pub fn new(kind: CurveKind, path: &'p mut Path) -> Self {
        let state = match kind {
            CurveKind::Linear => CurveState::Linear(LinearCurve::new()),
            CurveKind::CatmullRom => CurveState::CatmullRom(CatmullRomCurve::new(None)),
        };
        Curve { path, state }
    }

    /// Catmull-Rom curve with an explicit smoothness in `[0, 1]`.
    pub fn catmull_rom(path: &'p mut Path, smoothness: f64) -> Self {
        Curve {
            path,
            state: CurveState::CatmullRom(CatmullRomCurve::new(Some(smoothness))),
        }
    }

    /// Feed the next point of the stream.
    pub fn point(&mut self, x: f64, y: f64) {
        match &mut self.state {
            CurveState::Linear(c) => c.point(self.path, x, y),
            CurveState::CatmullRom(c) => c.point(self.path, x, y),
        }
    }

    /// Flush buffered points. Points fed afterwards continue the same path.
    pub fn end(&mut self) {
        match &mut self.state {
            CurveState::Linear(c) => c.end(self.path),
            CurveState::CatmullRom(c) => c.end(self.path),
        }
    }
}

/// Create a curve of the given kind writing into `path`.
pub fn curve(kind: CurveKind, path: &mut Path) -> Curve<'_> {
    Curve::new(kind, path)
}
