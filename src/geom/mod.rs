//! Geoms: per-datum adapters turning records into SVG elements.
//!
//! A [`GeomConfig`] names the geom kind, optional data and one [`Channel`]
//! per visual property. Resolving it against the plot's scales yields a
//! [`Geom`] whose channels are [`Accessor`]s, evaluated once per datum at
//! render time.

mod series;
mod shape;

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::backend::{NodeId, RenderTarget};
use crate::curve::CurveKind;
use crate::data::{Accessor, Channel, Record, Value};
use crate::element::Bounds;
use crate::error::PlotResult;
use crate::scale::ScaleMap;

/// Kind of mark a geom draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GeomKind {
    Point,
    Rectangle,
    Circle,
    Text,
    Line,
    XRule,
    YRule,
    Curve,
    Area,
}

impl fmt::Display for GeomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeomKind::Point => "point",
            GeomKind::Rectangle => "rectangle",
            GeomKind::Circle => "circle",
            GeomKind::Text => "text",
            GeomKind::Line => "line",
            GeomKind::XRule => "x-rule",
            GeomKind::YRule => "y-rule",
            GeomKind::Curve => "curve",
            GeomKind::Area => "area",
        };
        f.write_str(name)
    }
}

/// Visual property a channel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChannelName {
    X,
    Y,
    X1,
    Y1,
    X2,
    Y2,
    Width,
    Height,
    Radius,
    Fill,
    StrokeColor,
    StrokeWidth,
    Text,
    Rotation,
    TextAnchor,
    Baseline,
    Size,
}

impl ChannelName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelName::X => "x",
            ChannelName::Y => "y",
            ChannelName::X1 => "x1",
            ChannelName::Y1 => "y1",
            ChannelName::X2 => "x2",
            ChannelName::Y2 => "y2",
            ChannelName::Width => "width",
            ChannelName::Height => "height",
            ChannelName::Radius => "radius",
            ChannelName::Fill => "fill",
            ChannelName::StrokeColor => "stroke_color",
            ChannelName::StrokeWidth => "stroke_width",
            ChannelName::Text => "text",
            ChannelName::Rotation => "rotation",
            ChannelName::TextAnchor => "text_anchor",
            ChannelName::Baseline => "baseline",
            ChannelName::Size => "size",
        }
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geom as written in a chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeomConfig {
    #[serde(rename = "type")]
    pub kind: GeomKind,
    /// One element per record; without data a single element is drawn from
    /// constant channels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Record>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x1: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y1: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x2: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Channel>,
    /// Rotation in degrees around the text anchor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_anchor: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<Channel>,
    /// Font size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Channel>,
    /// Interpolation for curve and area geoms
    #[serde(default)]
    pub curve: CurveKind,
    /// Catmull-Rom smoothness in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothness: Option<f64>,
}

impl GeomConfig {
    pub fn new(kind: GeomKind) -> Self {
        GeomConfig {
            kind,
            data: None,
            x: None,
            y: None,
            x1: None,
            y1: None,
            x2: None,
            y2: None,
            width: None,
            height: None,
            radius: None,
            fill: None,
            stroke_color: None,
            stroke_width: None,
            text: None,
            rotation: None,
            text_anchor: None,
            baseline: None,
            size: None,
            curve: CurveKind::default(),
            smoothness: None,
        }
    }

    /// The configured channels with their names.
    pub fn channels(&self) -> Vec<(ChannelName, &Channel)> {
        [
            (ChannelName::X, &self.x),
            (ChannelName::Y, &self.y),
            (ChannelName::X1, &self.x1),
            (ChannelName::Y1, &self.y1),
            (ChannelName::X2, &self.x2),
            (ChannelName::Y2, &self.y2),
            (ChannelName::Width, &self.width),
            (ChannelName::Height, &self.height),
            (ChannelName::Radius, &self.radius),
            (ChannelName::Fill, &self.fill),
            (ChannelName::StrokeColor, &self.stroke_color),
            (ChannelName::StrokeWidth, &self.stroke_width),
            (ChannelName::Text, &self.text),
            (ChannelName::Rotation, &self.rotation),
            (ChannelName::TextAnchor, &self.text_anchor),
            (ChannelName::Baseline, &self.baseline),
            (ChannelName::Size, &self.size),
        ]
        .into_iter()
        .filter_map(|(name, channel)| channel.as_ref().map(|c| (name, c)))
        .collect()
    }
}

/// A geom with resolved channels, ready to render.
#[derive(Debug, Clone)]
pub struct Geom {
    kind: GeomKind,
    data: Option<Vec<Record>>,
    channels: BTreeMap<ChannelName, Accessor>,
    curve: CurveKind,
    smoothness: Option<f64>,
}

impl Geom {
    pub fn new(kind: GeomKind) -> Self {
        Geom {
            kind,
            data: None,
            channels: BTreeMap::new(),
            curve: CurveKind::default(),
            smoothness: None,
        }
    }

    /// Resolve every configured channel against `scales`.
    pub fn from_config(config: &GeomConfig, scales: &ScaleMap) -> PlotResult<Self> {
        let mut geom = Geom::new(config.kind).curve(config.curve);
        geom.data = config.data.clone();
        geom.smoothness = config.smoothness;
        for (name, channel) in config.channels() {
            geom.channels.insert(name, Accessor::resolve(channel, scales)?);
        }
        Ok(geom)
    }

    pub fn data(mut self, data: Vec<Record>) -> Self {
        self.data = Some(data);
        self
    }

    /// Drive `name` with `accessor`, replacing any previous encoding.
    pub fn encode(mut self, name: ChannelName, accessor: Accessor) -> Self {
        self.channels.insert(name, accessor);
        self
    }

    pub fn curve(mut self, kind: CurveKind) -> Self {
        self.curve = kind;
        self
    }

    pub fn smoothness(mut self, smoothness: f64) -> Self {
        self.smoothness = Some(smoothness);
        self
    }

    pub fn kind(&self) -> GeomKind {
        self.kind
    }

    pub fn records(&self) -> Option<&[Record]> {
        self.data.as_deref()
    }

    pub fn accessor(&self, name: ChannelName) -> Option<&Accessor> {
        self.channels.get(&name)
    }

    /// Render into a new group under `parent`.
    pub fn render(
        &self,
        target: &mut dyn RenderTarget,
        parent: Option<NodeId>,
        area: &Bounds,
    ) -> PlotResult<NodeId> {
        let group = target.create_element("g", parent);
        match self.kind {
            GeomKind::Curve => series::curve(self, target, group),
            GeomKind::Area => series::area(self, target, group),
            _ => shape::render(self, target, group, area),
        }
        Ok(group)
    }

    /// Channel lookups for one datum.
    pub(crate) fn datum<'a>(&'a self, record: Option<&'a Record>, index: usize) -> Datum<'a> {
        Datum {
            geom: self,
            record,
            index,
        }
    }
}

/// A configured channel had no value for a datum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unresolved(pub ChannelName);

/// Evaluates a geom's channels for one datum, falling back to defaults for
/// channels that are not configured.
pub(crate) struct Datum<'a> {
    geom: &'a Geom,
    record: Option<&'a Record>,
    index: usize,
}

impl Datum<'_> {
    pub fn index(&self) -> usize {
        self.index
    }

    fn value(&self, name: ChannelName) -> Result<Option<Value>, Unresolved> {
        match self.geom.channels.get(&name) {
            None => Ok(None),
            Some(accessor) => accessor
                .get(self.record, self.index)
                .map(Some)
                .ok_or(Unresolved(name)),
        }
    }

    /// Numeric channel; configured channels yielding text are unresolved.
    pub fn number(&self, name: ChannelName, default: f64) -> Result<f64, Unresolved> {
        Ok(self.optional_number(name)?.unwrap_or(default))
    }

    pub fn optional_number(&self, name: ChannelName) -> Result<Option<f64>, Unresolved> {
        match self.value(name)? {
            None => Ok(None),
            Some(value) => value.as_f64().map(Some).ok_or(Unresolved(name)),
        }
    }

    /// Attribute-valued channel; numbers print in their shortest form.
    pub fn text(&self, name: ChannelName, default: &str) -> Result<String, Unresolved> {
        Ok(self
            .value(name)?
            .map(|v| v.to_string())
            .unwrap_or_else(|| default.to_string()))
    }
}

/// Log a datum dropped because one of its channels did not resolve.
pub(crate) fn log_skipped(kind: GeomKind, index: usize, missing: Unresolved) {
    debug!(
        "{} geom: skipping datum {} (channel '{}' did not resolve)",
        kind, index, missing.0
    );
}
