//! Axis configuration, layout and rendering.

use std::sync::Arc;

use log::{debug, trace};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::text::{DominantBaseline, TextAnchor};
use super::Bounds;
use crate::backend::{NodeId, RenderTarget};
use crate::data::{Value, format_number};
use crate::error::{PlotError, PlotResult};
use crate::path::polyline;
use crate::scale::{Scale, ScaleMap, ticks};

const GRID_OPACITY: f64 = 0.2;

/// Side of the drawing area an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AxisPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisPosition {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, AxisPosition::Top | AxisPosition::Bottom)
    }
}

/// Configuration for an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AxisConfig {
    /// Name of the scale the axis decorates
    pub scale: String,
    pub position: AxisPosition,
    /// Approximate number of ticks for linear scales
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    /// Length of tick marks in pixels
    #[serde(default = "default_tick_size")]
    pub tick_size: f64,
    /// Padding between tick marks and labels
    #[serde(default = "default_tick_padding")]
    pub tick_padding: f64,
    /// Draw gridlines at full opacity
    #[serde(default)]
    pub grid: bool,
    /// printf-style label format (`%.2f`, `%e`, `%g`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

fn default_tick_count() -> usize { 5 }
fn default_tick_size() -> f64 { 6.0 }
fn default_tick_padding() -> f64 { 3.0 }
fn default_font_size() -> f64 { 12.0 }

impl AxisConfig {
    pub fn new(scale: impl Into<String>, position: AxisPosition) -> Self {
        AxisConfig {
            scale: scale.into(),
            position,
            tick_count: default_tick_count(),
            tick_size: default_tick_size(),
            tick_padding: default_tick_padding(),
            grid: false,
            format: None,
            font_size: default_font_size(),
        }
    }
}

/// One laid-out tick, in drawing-area pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: Value,
    /// Position along the axis
    pub position: f64,
    pub label: String,
    /// Label anchor point
    pub anchor: (f64, f64),
    pub text_anchor: TextAnchor,
    pub baseline: DominantBaseline,
    /// Tick mark segment, perpendicular to the axis
    pub tick: [(f64, f64); 2],
    /// Gridline segment across the drawing area
    pub grid: [(f64, f64); 2],
}

/// An axis bound to a scale.
#[derive(Debug, Clone)]
pub struct Axis {
    scale: Arc<Scale>,
    position: AxisPosition,
    tick_count: usize,
    tick_size: f64,
    tick_padding: f64,
    grid: bool,
    format: Option<String>,
    font_size: f64,
}

impl Axis {
    pub fn new(scale: Arc<Scale>, position: AxisPosition) -> Self {
        let defaults = AxisConfig::new("", position);
        Axis {
            scale,
            position,
            tick_count: defaults.tick_count,
            tick_size: defaults.tick_size,
            tick_padding: defaults.tick_padding,
            grid: defaults.grid,
            format: None,
            font_size: defaults.font_size,
        }
    }

    /// Build an axis from configuration, looking its scale up by name.
    pub fn from_config(config: &AxisConfig, scales: &ScaleMap) -> PlotResult<Self> {
        let scale = scales.get(&config.scale).ok_or_else(|| {
            PlotError::InvalidConfig(format!(
                "{:?} axis refers to unknown scale '{}'",
                config.position, config.scale
            ))
        })?;
        Ok(Axis {
            scale: Arc::clone(scale),
            position: config.position,
            tick_count: config.tick_count,
            tick_size: config.tick_size,
            tick_padding: config.tick_padding,
            grid: config.grid,
            format: config.format.clone(),
            font_size: config.font_size,
        })
    }

    pub fn tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn tick_size(mut self, size: f64) -> Self {
        self.tick_size = size;
        self
    }

    pub fn tick_padding(mut self, padding: f64) -> Self {
        self.tick_padding = padding;
        self
    }

    /// Opt in to fully opaque gridlines.
    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn position(&self) -> AxisPosition {
        self.position
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Gridline opacity.
    pub fn grid_opacity(&self) -> f64 {
        if self.grid {
            1.0
        } else {
            GRID_OPACITY
        }
    }

    /// Values the axis places ticks at.
    ///
    /// Discrete-family scales use their keys; linear scales generate nice
    /// ticks within the domain.
    pub fn tick_values(&self) -> PlotResult<Vec<Value>> {
        if let Some(keys) = self.scale.keys() {
            return Ok(keys.to_vec());
        }
        let Some(linear) = self.scale.as_linear() else {
            return Ok(Vec::new());
        };
        let (min, max) = linear.domain_bounds();
        let values = ticks(min, max, self.tick_count, false)?;
        Ok(values
            .into_iter()
            .filter(|v| *v >= min && *v <= max)
            .map(Value::Number)
            .collect())
    }

    /// Format a tick value as a label.
    pub fn format_tick(&self, value: &Value) -> String {
        let Value::Number(value) = value else {
            return value.to_string();
        };
        let value = *value;
        let Some(ref format) = self.format else {
            return format_number(value);
        };
        if format.contains("%e") || format.contains("%E") {
            format!("{:e}", value)
        } else if format.contains("%g") || format.contains("%G") {
            // General format - use exponential for very large/small numbers
            if value.abs() >= 1e6 || (value != 0.0 && value.abs() < 1e-4) {
                format!("{:e}", value)
            } else {
                format_number(value)
            }
        } else {
            let precision = format
                .find('.')
                .map(|i| &format[i + 1..])
                .and_then(|rest| {
                    let end = rest
                        .find(|c: char| !c.is_ascii_digit())
                        .unwrap_or(rest.len());
                    rest[..end].parse::<usize>().ok()
                })
                .unwrap_or(2);
            format!("{:.prec$}", value, prec = precision)
        }
    }

    /// Pixel position of a tick, centred in its band for interval scales.
    fn locate(&self, value: &Value) -> Option<f64> {
        let position = self.scale.apply(value)?;
        match &*self.scale {
            Scale::Interval(s) => Some(position + s.step() / 2.0),
            _ => Some(position),
        }
    }

    /// Compute tick positions, labels and segments within `area`.
    ///
    /// Ticks whose value does not map to a position are skipped.
    pub fn layout(&self, area: &Bounds) -> PlotResult<Vec<AxisTick>> {
        let size = self.tick_size;
        let offset = self.tick_size + self.tick_padding;
        let mut laid_out = Vec::new();

        for value in self.tick_values()? {
            let Some(p) = self.locate(&value) else {
                trace!("skipping tick {} without a position", value);
                continue;
            };
            let (anchor, text_anchor, baseline, tick, grid) = match self.position {
                AxisPosition::Bottom => {
                    let y = area.y_max;
                    (
                        (p, y + offset),
                        TextAnchor::Middle,
                        DominantBaseline::Hanging,
                        [(p, y), (p, y + size)],
                        [(p, area.y_min), (p, area.y_max)],
                    )
                }
                AxisPosition::Top => {
                    let y = area.y_min;
                    (
                        (p, y - offset),
                        TextAnchor::Middle,
                        DominantBaseline::Auto,
                        [(p, y), (p, y - size)],
                        [(p, area.y_min), (p, area.y_max)],
                    )
                }
                AxisPosition::Left => {
                    let x = area.x_min;
                    (
                        (x - offset, p),
                        TextAnchor::End,
                        DominantBaseline::Middle,
                        [(x, p), (x - size, p)],
                        [(area.x_min, p), (area.x_max, p)],
                    )
                }
                AxisPosition::Right => {
                    let x = area.x_max;
                    (
                        (x + offset, p),
                        TextAnchor::Start,
                        DominantBaseline::Middle,
                        [(x, p), (x + size, p)],
                        [(area.x_min, p), (area.x_max, p)],
                    )
                }
            };
            laid_out.push(AxisTick {
                label: self.format_tick(&value),
                value,
                position: p,
                anchor,
                text_anchor,
                baseline,
                tick,
                grid,
            });
        }
        Ok(laid_out)
    }

    /// The axis line along the edge of `area`.
    fn domain_line(&self, area: &Bounds) -> [(f64, f64); 2] {
        let horizontal = self.position.is_horizontal();
        let (a, b) = self.scale.extent().unwrap_or(if horizontal {
            (area.x_min, area.x_max)
        } else {
            (area.y_min, area.y_max)
        });
        match self.position {
            AxisPosition::Bottom => [(a, area.y_max), (b, area.y_max)],
            AxisPosition::Top => [(a, area.y_min), (b, area.y_min)],
            AxisPosition::Left => [(area.x_min, a), (area.x_min, b)],
            AxisPosition::Right => [(area.x_max, a), (area.x_max, b)],
        }
    }

    /// Render the axis into a new group under `parent`.
    pub fn render(
        &self,
        target: &mut dyn RenderTarget,
        parent: Option<NodeId>,
        area: &Bounds,
    ) -> PlotResult<NodeId> {
        let ticks = self.layout(area)?;
        let group = target.create_element("g", parent);

        let line = target.create_element("path", Some(group));
        target.set_attribute(line, "d", &polyline(&self.domain_line(area), false));
        target.set_attribute(line, "fill", "none");
        target.set_attribute(line, "stroke", "#000");
        target.set_attribute(line, "stroke-width", "1");

        let opacity = format_number(self.grid_opacity());
        let font_size = format_number(self.font_size);
        for tick in &ticks {
            let mark = target.create_element("path", Some(group));
            target.set_attribute(mark, "d", &polyline(&tick.tick, false));
            target.set_attribute(mark, "fill", "none");
            target.set_attribute(mark, "stroke", "#000");
            target.set_attribute(mark, "stroke-width", "1");

            let grid = target.create_element("path", Some(group));
            target.set_attribute(grid, "d", &polyline(&tick.grid, false));
            target.set_attribute(grid, "fill", "none");
            target.set_attribute(grid, "stroke", "#000");
            target.set_attribute(grid, "stroke-width", "1");
            target.set_attribute(grid, "stroke-opacity", &opacity);

            let label = target.create_element("text", Some(group));
            target.set_attribute(label, "x", &format_number(tick.anchor.0));
            target.set_attribute(label, "y", &format_number(tick.anchor.1));
            target.set_attribute(label, "text-anchor", tick.text_anchor.to_svg_string());
            target.set_attribute(label, "dominant-baseline", tick.baseline.to_svg_string());
            target.set_attribute(label, "font-size", &font_size);
            target.set_attribute(label, "fill", "#000");
            target.set_text(label, &tick.label);
        }

        debug!(
            "rendered {:?} axis ({} scale) with {} ticks",
            self.position,
            self.scale.kind(),
            ticks.len()
        );
        Ok(group)
    }
}
