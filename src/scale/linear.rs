//! Linear scale transformation.

use super::{ScaleConfig, numeric_pair};
use crate::error::{PlotError, PlotResult};

/// A clamped affine map from a numeric domain onto a pixel range.
///
/// Inputs outside the domain saturate at the nearest range endpoint. Both the
/// domain and the range may be reversed (`[height, 0]` is the usual y range).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a new linear scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> PlotResult<Self> {
        if !(domain.0.is_finite() && domain.1.is_finite()) {
            return Err(PlotError::InvalidConfig(
                "Linear scale domain must be finite".to_string(),
            ));
        }
        if !(range.0.is_finite() && range.1.is_finite()) {
            return Err(PlotError::InvalidConfig(
                "Linear scale range must be finite".to_string(),
            ));
        }
        if domain.0 == domain.1 {
            return Err(PlotError::InvalidConfig(format!(
                "Linear scale domain [{}, {}] has zero length",
                domain.0, domain.1
            )));
        }
        Ok(LinearScale { domain, range })
    }

    /// Build from a configuration, widening the domain to include zero when asked.
    pub fn from_config(config: &ScaleConfig) -> PlotResult<Self> {
        let mut domain = numeric_pair("domain", &config.domain)?;
        let range = numeric_pair("range", &config.range)?;
        if config.zero {
            domain = include_zero(domain);
        }
        Self::new(domain, range)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Smallest and largest domain values.
    pub fn domain_bounds(&self) -> (f64, f64) {
        sorted(self.domain)
    }

    /// Map a domain value into the range.
    pub fn map(&self, value: f64) -> f64 {
        let (lo, hi) = sorted(self.domain);
        let v = value.clamp(lo, hi);
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (r1 - r0) * (v - d0) / (d1 - d0)
    }

    /// Map a range value back into the domain.
    ///
    /// Returns `None` when the range has zero length.
    pub fn invert(&self, value: f64) -> Option<f64> {
        let (r0, r1) = self.range;
        if r0 == r1 {
            return None;
        }
        let (lo, hi) = sorted(self.range);
        let v = value.clamp(lo, hi);
        let (d0, d1) = self.domain;
        Some(d0 + (v - r0) * (d1 - d0) / (r1 - r0))
    }
}

fn sorted((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Widen an interval to contain zero, keeping its orientation.
fn include_zero((d0, d1): (f64, f64)) -> (f64, f64) {
    if d0 <= d1 {
        (d0.min(0.0), d1.max(0.0))
    } else {
        (d0.max(0.0), d1.min(0.0))
    }
}
