//! JSON Schema generation and validation for chart configurations

use std::sync::LazyLock;

use schemars::schema_for;
use serde_json::Value;

use crate::config::PlotConfig;
use crate::error::{PlotError, PlotResult};

/// Cached JSON Schema for PlotConfig.
static SCHEMA: LazyLock<schemars::Schema> = LazyLock::new(|| schema_for!(PlotConfig));

pub fn schema() -> &'static schemars::Schema {
    &SCHEMA
}

/// Returns the JSON Schema as a pretty-printed JSON string.
pub fn schema_json_pretty() -> PlotResult<String> {
    Ok(serde_json::to_string_pretty(&*SCHEMA)?)
}

/// Validate a JSON value against the PlotConfig schema.
///
/// All validation errors are reported in one `InvalidConfig` message.
pub fn validate(value: &Value) -> PlotResult<()> {
    let schema_val = serde_json::to_value(&*SCHEMA)?;
    let validator = jsonschema::validator_for(&schema_val)
        .map_err(|e| PlotError::InvalidConfig(format!("Failed to compile schema: {}", e)))?;

    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|e| format!("  - {}: {}", e.instance_path, e))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PlotError::InvalidConfig(format!(
            "chart JSON failed schema validation ({} errors):\n{}",
            errors.len(),
            errors.join("\n")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveKind;
    use serde_json::json;

    #[test]
    fn test_schema_generation() {
        let schema = schema_json_pretty().unwrap();
        let parsed: Value = serde_json::from_str(&schema).unwrap();
        assert_eq!(
            parsed.get("type").and_then(|v| v.as_str()),
            Some("object")
        );
        let properties = parsed.get("properties").unwrap();
        for key in ["width", "height", "margin", "scales", "axes", "geoms"] {
            assert!(properties.get(key).is_some(), "missing property {}", key);
        }
    }

    #[test]
    fn test_validate_default_config() {
        let value = serde_json::to_value(PlotConfig::default()).unwrap();
        assert!(validate(&value).is_ok());
        assert!(validate(&json!({})).is_ok());
    }

    #[test]
    fn test_validate_chart() {
        let chart = json!({
            "width": 300,
            "scales": {"x": {"type": "point", "domain": ["a", "b"], "range": [0, 300], "margin": 0.5}},
            "axes": [{"scale": "x", "position": "top", "grid": true}],
            "geoms": [
                {"type": "text", "data": [{"k": "a"}], "x": {"field": "k", "scale": "x"}, "text": {"field": "k"}},
                {"type": "curve", "curve": "catmull-rom", "smoothness": 0.3}
            ]
        });
        assert!(validate(&chart).is_ok(), "{:?}", validate(&chart));
    }

    #[test]
    fn test_validate_accepts_every_curve_name() {
        let names = [
            ("linear", CurveKind::Linear),
            ("catmull", CurveKind::CatmullRom),
            ("catmull-rom", CurveKind::CatmullRom),
        ];
        for (name, kind) in names {
            let chart = json!({"geoms": [{"type": "curve", "curve": name}]});
            assert!(validate(&chart).is_ok(), "{}: {:?}", name, validate(&chart));
            let config = PlotConfig::from_value(chart).unwrap();
            assert_eq!(config.geoms[0].curve, kind);
        }

        let unknown = json!({"geoms": [{"type": "curve", "curve": "bezier"}]});
        assert!(validate(&unknown).is_err());
    }

    #[test]
    fn test_validate_invalid_chart() {
        let bad_type = json!({"geoms": [{"type": "hexbin"}]});
        assert!(matches!(validate(&bad_type), Err(PlotError::InvalidConfig(_))));

        let bad_width = json!({"width": "wide"});
        assert!(validate(&bad_width).is_err());

        let bad_position = json!({"axes": [{"scale": "x", "position": "middle"}]});
        assert!(validate(&bad_position).is_err());
    }
}
