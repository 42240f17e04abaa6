//! Chart configuration.
//!
//! A chart is described by a single JSON document: canvas size, named
//! scales, axes and geoms. Scales are referenced from axes and channels by
//! name.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::element::AxisConfig;
use crate::error::PlotResult;
use crate::geom::GeomConfig;
use crate::scale::ScaleConfig;

/// Complete chart description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlotConfig {
    /// Canvas width in pixels
    #[serde(default = "default_size")]
    pub width: f64,
    /// Canvas height in pixels
    #[serde(default = "default_size")]
    pub height: f64,
    /// Inset of the drawing area on every side
    #[serde(default)]
    pub margin: f64,
    #[serde(default)]
    pub scales: BTreeMap<String, ScaleConfig>,
    #[serde(default)]
    pub axes: Vec<AxisConfig>,
    /// Drawn in order, each into its own group
    #[serde(default)]
    pub geoms: Vec<GeomConfig>,
}

fn default_size() -> f64 { 500.0 }

impl PlotConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: PlotConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> PlotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> PlotResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: default_size(),
            height: default_size(),
            margin: 0.0,
            scales: BTreeMap::new(),
            axes: Vec::new(),
            geoms: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::AxisPosition;
    use crate::error::PlotError;
    use crate::geom::GeomKind;
    use crate::scale::ScaleKind;

    #[test]
    fn test_defaults() {
        let config = PlotConfig::from_json("{}").unwrap();
        assert_eq!(config, PlotConfig::default());
        assert_eq!(config.width, 500.0);
        assert_eq!(config.height, 500.0);
        assert_eq!(config.margin, 0.0);
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "width": 400,
            "height": 300,
            "margin": 20,
            "scales": {
                "x": {"type": "interval", "domain": ["a", "b"], "range": [0, 360], "spacing": 0.2},
                "y": {"domain": [0, 10], "range": [260, 0], "zero": true}
            },
            "axes": [{"scale": "x", "position": "bottom"}],
            "geoms": [{"type": "rectangle", "x": {"field": "k", "scale": "x"}}]
        }"#;
        let config = PlotConfig::from_json(json).unwrap();
        assert_eq!(config.margin, 20.0);
        assert_eq!(config.scales["x"].kind, ScaleKind::Interval);
        assert_eq!(config.scales["x"].spacing, Some(0.2));
        assert_eq!(config.scales["y"].kind, ScaleKind::Linear);
        assert!(config.scales["y"].zero);
        assert_eq!(config.axes[0].position, AxisPosition::Bottom);
        assert_eq!(config.axes[0].tick_count, 5);
        assert_eq!(config.geoms[0].kind, GeomKind::Rectangle);
    }

    #[test]
    fn test_malformed_json() {
        let result = PlotConfig::from_json(r#"{"width": "wide"}"#);
        assert!(matches!(result, Err(PlotError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = PlotConfig::load("/nonexistent/chart.json");
        assert!(matches!(result, Err(PlotError::Io(_))));
    }
}
