//! Interval (band) scale.

use super::{DiscreteScale, ScaleConfig, numeric_pair, unit_fraction};
use crate::data::Value;
use crate::error::{PlotError, PlotResult};

/// Partitions a range into one equal-width band per domain key.
///
/// With `n` keys the band width is
/// `step = length / (2·margin + (n-1)·spacing + n)`; band `i` starts at
/// `range.0 + step·(margin + i·spacing + i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalScale {
    edges: DiscreteScale<f64>,
    range: (f64, f64),
    step: f64,
    margin: f64,
    spacing: f64,
}

impl IntervalScale {
    /// Create a new interval scale. `margin` and `spacing` are clamped to `[0, 1]`.
    pub fn new(
        domain: Vec<Value>,
        range: (f64, f64),
        margin: f64,
        spacing: f64,
    ) -> PlotResult<Self> {
        if domain.is_empty() {
            return Err(PlotError::EmptyData);
        }
        let margin = unit_fraction("interval margin", Some(margin));
        let spacing = unit_fraction("interval spacing", Some(spacing));
        let n = domain.len() as f64;
        let step = (range.1 - range.0) / (2.0 * margin + (n - 1.0) * spacing + n);
        let edges = (0..domain.len())
            .map(|i| {
                let i = i as f64;
                range.0 + step * (margin + i * spacing + i)
            })
            .collect();
        Ok(IntervalScale {
            edges: DiscreteScale::new(domain, edges)?,
            range,
            step,
            margin,
            spacing,
        })
    }

    pub fn from_config(config: &ScaleConfig) -> PlotResult<Self> {
        let range = numeric_pair("range", &config.range)?;
        Self::new(
            config.domain.clone(),
            range,
            config.margin.unwrap_or(0.0),
            config.spacing.unwrap_or(0.0),
        )
    }

    /// Leading edge of the key's band.
    pub fn get(&self, key: &Value) -> Option<f64> {
        self.edges.get(key).copied()
    }

    /// Leading and trailing edges of the key's band.
    pub fn band(&self, key: &Value) -> Option<(f64, f64)> {
        self.get(key).map(|start| (start, start + self.step))
    }

    /// Middle of the key's band.
    pub fn center(&self, key: &Value) -> Option<f64> {
        self.get(key).map(|start| start + self.step / 2.0)
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn domain(&self) -> &[Value] {
        self.edges.domain()
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(n: usize) -> Vec<Value> {
        (0..n).map(|i| Value::from(format!("k{}", i))).collect()
    }

    #[test]
    fn test_plain_bands() {
        let scale = IntervalScale::new(domain(4), (0.0, 400.0), 0.0, 0.0).unwrap();
        assert_eq!(scale.step(), 100.0);
        assert_eq!(scale.get(&Value::from("k0")), Some(0.0));
        assert_eq!(scale.get(&Value::from("k3")), Some(300.0));
        assert_eq!(scale.center(&Value::from("k1")), Some(150.0));
    }

    #[test]
    fn test_margin_and_spacing() {
        // 2·0.5 + 2·0.5 + 3 = 5 steps over 500 px
        let scale = IntervalScale::new(domain(3), (0.0, 500.0), 0.5, 0.5).unwrap();
        assert_eq!(scale.step(), 100.0);
        assert_eq!(scale.band(&Value::from("k0")), Some((50.0, 150.0)));
        assert_eq!(scale.band(&Value::from("k1")), Some((200.0, 300.0)));
        assert_eq!(scale.band(&Value::from("k2")), Some((350.0, 450.0)));
    }

    #[test]
    fn test_bands_never_overlap() {
        let fractions = [0.0, 0.1, 0.25, 0.5, 0.9, 1.0];
        for &margin in &fractions {
            for &spacing in &fractions {
                let keys = domain(7);
                let scale =
                    IntervalScale::new(keys.clone(), (10.0, 610.0), margin, spacing).unwrap();
                for pair in keys.windows(2) {
                    let (_, right) = scale.band(&pair[0]).unwrap();
                    let (left, _) = scale.band(&pair[1]).unwrap();
                    assert!(right <= left + 1e-9, "margin {} spacing {}", margin, spacing);
                }
                let (first, _) = scale.band(&keys[0]).unwrap();
                let (_, last) = scale.band(&keys[6]).unwrap();
                assert!(first >= 10.0 - 1e-9 && last <= 610.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_options_are_clamped() {
        let scale = IntervalScale::new(domain(2), (0.0, 100.0), 3.0, -1.0).unwrap();
        assert_eq!(scale.margin(), 1.0);
        assert_eq!(scale.spacing(), 0.0);
    }

    #[test]
    fn test_empty_domain_rejected() {
        assert!(matches!(
            IntervalScale::new(Vec::new(), (0.0, 100.0), 0.0, 0.0),
            Err(PlotError::EmptyData)
        ));
    }
}
