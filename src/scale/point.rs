//! Point scale.

use super::{DiscreteScale, ScaleConfig, numeric_pair, unit_fraction};
use crate::data::Value;
use crate::error::{PlotError, PlotResult};

/// Places one point per domain key, evenly spaced inside the range.
///
/// `step = length / (2·margin + n - 1)`; point `i` sits at
/// `range.0 + step·(margin + i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale {
    points: DiscreteScale<f64>,
    range: (f64, f64),
    step: f64,
    margin: f64,
}

impl PointScale {
    pub fn new(domain: Vec<Value>, range: (f64, f64), margin: f64) -> PlotResult<Self> {
        if domain.is_empty() {
            return Err(PlotError::EmptyData);
        }
        let margin = unit_fraction("point margin", Some(margin));
        let n = domain.len() as f64;
        let denominator = 2.0 * margin + n - 1.0;
        if denominator == 0.0 {
            return Err(PlotError::InvalidConfig(
                "Point scale with a single key needs a non-zero margin".to_string(),
            ));
        }
        let step = (range.1 - range.0) / denominator;
        let points = (0..domain.len())
            .map(|i| range.0 + step * (margin + i as f64))
            .collect();
        Ok(PointScale {
            points: DiscreteScale::new(domain, points)?,
            range,
            step,
            margin,
        })
    }

    pub fn from_config(config: &ScaleConfig) -> PlotResult<Self> {
        if config.spacing.is_some() {
            log::debug!("point scale ignores the spacing option");
        }
        let range = numeric_pair("range", &config.range)?;
        Self::new(
            config.domain.clone(),
            range,
            config.margin.unwrap_or(0.0),
        )
    }

    pub fn get(&self, key: &Value) -> Option<f64> {
        self.points.get(key).copied()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn domain(&self) -> &[Value] {
        self.points.domain()
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
