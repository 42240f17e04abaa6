//! Scales: mappings from data domains to visual ranges.
//!
//! Four variants share the [`Scale`] sum type:
//!
//! - [`LinearScale`] - clamped affine map between two numeric intervals, invertible
//! - [`DiscreteScale`] - ordinal lookup cycling through a range of values
//! - [`IntervalScale`] - equal-width bands with margin and spacing
//! - [`PointScale`] - evenly spaced points with a margin
//!
//! Scales are built once from a [`ScaleConfig`] and never mutated afterwards.

mod discrete;
mod interval;
mod linear;
mod point;
mod ticks;

pub use discrete::DiscreteScale;
pub use interval::IntervalScale;
pub use linear::LinearScale;
pub use point::PointScale;
pub use ticks::{TICK_PRECISION, nice_number, round_to, ticks};

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::data::Value;
use crate::error::{PlotError, PlotResult};

/// Named scales shared by the geoms and axes of one plot.
pub type ScaleMap = BTreeMap<String, Arc<Scale>>;

/// Scale variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    #[default]
    Linear,
    Discrete,
    Interval,
    Point,
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScaleKind::Linear => "linear",
            ScaleKind::Discrete => "discrete",
            ScaleKind::Interval => "interval",
            ScaleKind::Point => "point",
        };
        f.write_str(name)
    }
}

/// Options recognized by all scale constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScaleConfig {
    /// Scale variant
    #[serde(rename = "type", default)]
    pub kind: ScaleKind,
    /// Two numbers for linear scales, the ordered keys otherwise
    pub domain: Vec<Value>,
    /// Two pixel bounds, or the cycled output values of a discrete scale
    pub range: Vec<Value>,
    /// Widen a linear domain so it contains zero
    #[serde(default)]
    pub zero: bool,
    /// Leading/trailing inset of interval and point scales, in steps (0..=1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    /// Gap between consecutive interval bands, in steps (0..=1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
}

impl ScaleConfig {
    /// Create a configuration of the given kind.
    pub fn new<D, R>(
        kind: ScaleKind,
        domain: impl IntoIterator<Item = D>,
        range: impl IntoIterator<Item = R>,
    ) -> Self
    where
        D: Into<Value>,
        R: Into<Value>,
    {
        ScaleConfig {
            kind,
            domain: domain.into_iter().map(Into::into).collect(),
            range: range.into_iter().map(Into::into).collect(),
            zero: false,
            margin: None,
            spacing: None,
        }
    }

    pub fn linear(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self::new(ScaleKind::Linear, domain, range)
    }

    /// Set whether the linear domain must include zero.
    pub fn zero(mut self, zero: bool) -> Self {
        self.zero = zero;
        self
    }

    /// Set the outer margin.
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Set the inter-band spacing.
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }
}

/// A constructed scale.
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    Linear(LinearScale),
    Discrete(DiscreteScale),
    Interval(IntervalScale),
    Point(PointScale),
}

impl Scale {
    /// Build the variant selected by `config.kind`.
    pub fn new(config: &ScaleConfig) -> PlotResult<Self> {
        match config.kind {
            ScaleKind::Linear => Self::linear(config),
            ScaleKind::Discrete => Self::discrete(config),
            ScaleKind::Interval => Self::interval(config),
            ScaleKind::Point => Self::point(config),
        }
    }

    pub fn linear(config: &ScaleConfig) -> PlotResult<Self> {
        LinearScale::from_config(config).map(Scale::Linear)
    }

    pub fn discrete(config: &ScaleConfig) -> PlotResult<Self> {
        DiscreteScale::new(config.domain.clone(), config.range.clone()).map(Scale::Discrete)
    }

    pub fn interval(config: &ScaleConfig) -> PlotResult<Self> {
        IntervalScale::from_config(config).map(Scale::Interval)
    }

    pub fn point(config: &ScaleConfig) -> PlotResult<Self> {
        PointScale::from_config(config).map(Scale::Point)
    }

    pub fn kind(&self) -> ScaleKind {
        match self {
            Scale::Linear(_) => ScaleKind::Linear,
            Scale::Discrete(_) => ScaleKind::Discrete,
            Scale::Interval(_) => ScaleKind::Interval,
            Scale::Point(_) => ScaleKind::Point,
        }
    }

    /// Whether the scale maps an enumerated set of keys.
    pub fn is_discrete(&self) -> bool {
        !matches!(self, Scale::Linear(_))
    }

    /// Map a domain value to a numeric range value.
    ///
    /// Linear scales clamp; the discrete family returns `None` for unknown
    /// keys (and for non-numeric discrete range entries).
    pub fn apply(&self, value: &Value) -> Option<f64> {
        match self {
            Scale::Linear(s) => value.as_f64().map(|v| s.map(v)),
            Scale::Discrete(s) => s.get(value).and_then(Value::as_f64),
            Scale::Interval(s) => s.get(value),
            Scale::Point(s) => s.get(value),
        }
    }

    /// Map a domain value, keeping non-numeric discrete range entries.
    pub fn apply_value(&self, value: &Value) -> Option<Value> {
        match self {
            Scale::Discrete(s) => s.get(value).cloned(),
            _ => self.apply(value).map(Value::Number),
        }
    }

    /// Inverse mapping, only available on linear scales.
    pub fn invert(&self, value: f64) -> Option<f64> {
        self.as_linear().and_then(|s| s.invert(value))
    }

    pub fn as_linear(&self) -> Option<&LinearScale> {
        match self {
            Scale::Linear(s) => Some(s),
            _ => None,
        }
    }

    /// Band or point spacing of interval and point scales.
    pub fn step(&self) -> Option<f64> {
        match self {
            Scale::Interval(s) => Some(s.step()),
            Scale::Point(s) => Some(s.step()),
            _ => None,
        }
    }

    /// The ordered keys of a discrete-family scale.
    pub fn keys(&self) -> Option<&[Value]> {
        match self {
            Scale::Linear(_) => None,
            Scale::Discrete(s) => Some(s.domain()),
            Scale::Interval(s) => Some(s.domain()),
            Scale::Point(s) => Some(s.domain()),
        }
    }

    /// Pixel bounds of positional scales.
    pub fn extent(&self) -> Option<(f64, f64)> {
        match self {
            Scale::Linear(s) => Some(s.range()),
            Scale::Discrete(_) => None,
            Scale::Interval(s) => Some(s.range()),
            Scale::Point(s) => Some(s.range()),
        }
    }
}

/// Read exactly two finite numbers.
pub(crate) fn numeric_pair(name: &str, values: &[Value]) -> PlotResult<(f64, f64)> {
    match values {
        [a, b] => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) if a.is_finite() && b.is_finite() => Ok((a, b)),
            _ => Err(PlotError::InvalidConfig(format!(
                "{} must contain two finite numbers",
                name
            ))),
        },
        _ => Err(PlotError::InvalidConfig(format!(
            "{} must contain exactly two values, got {}",
            name,
            values.len()
        ))),
    }
}

/// Clamp an optional fraction option into `[0, 1]`, defaulting to zero.
pub(crate) fn unit_fraction(name: &str, value: Option<f64>) -> f64 {
    match value {
        None => 0.0,
        Some(v) if v.is_nan() => {
            warn!("{} is NaN, using 0", name);
            0.0
        }
        Some(v) => {
            let clamped = v.clamp(0.0, 1.0);
            if clamped != v {
                warn!("{} {} clamped to {}", name, v, clamped);
            }
            clamped
        }
    }
}
