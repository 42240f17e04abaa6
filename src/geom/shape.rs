//! Geoms drawing one element per datum.

use log::{debug, trace};

use super::{ChannelName as C, Datum, Geom, GeomKind, Unresolved, log_skipped};
use crate::backend::{NodeId, RenderTarget};
use crate::data::format_number;
use crate::element::Bounds;
use crate::path::{Circle, Rect, circle, polyline, rectangle};

/// Element kind, attributes and optional text content for one datum.
struct Mark {
    kind: &'static str,
    attributes: Vec<(&'static str, String)>,
    text: Option<String>,
}

impl Mark {
    fn new(kind: &'static str) -> Self {
        Mark {
            kind,
            attributes: Vec::new(),
            text: None,
        }
    }

    fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    fn number(self, name: &'static str, value: f64) -> Self {
        self.attr(name, format_number(value))
    }

    /// Stroke colour and width shared by outlined marks.
    fn stroke(self, datum: &Datum<'_>) -> Result<Self, Unresolved> {
        Ok(self
            .attr("stroke", datum.text(C::StrokeColor, "#000")?)
            .number("stroke-width", datum.number(C::StrokeWidth, 1.0)?))
    }

    fn emit(self, target: &mut dyn RenderTarget, parent: NodeId) {
        let node = target.create_element(self.kind, Some(parent));
        for (name, value) in &self.attributes {
            target.set_attribute(node, name, value);
        }
        if let Some(text) = &self.text {
            target.set_text(node, text);
        }
    }
}

fn point(datum: &Datum<'_>) -> Result<Mark, Unresolved> {
    Ok(Mark::new("circle")
        .number("cx", datum.number(C::X, 0.0)?)
        .number("cy", datum.number(C::Y, 0.0)?)
        .attr("fill", datum.text(C::Fill, "#000")?)
        .number("r", datum.number(C::Radius, 2.0)?))
}

fn rect(datum: &Datum<'_>) -> Result<Mark, Unresolved> {
    let d = rectangle(&Rect {
        x: datum.number(C::X, 0.0)?,
        y: datum.number(C::Y, 0.0)?,
        width: datum.number(C::Width, 0.0)?,
        height: datum.number(C::Height, 0.0)?,
        radius: Some(datum.number(C::Radius, 0.0)?),
    });
    Mark::new("path")
        .attr("d", d)
        .attr("fill", datum.text(C::Fill, "transparent")?)
        .stroke(datum)
}

fn ring(datum: &Datum<'_>) -> Result<Mark, Unresolved> {
    let d = circle(&Circle {
        x: datum.number(C::X, 0.0)?,
        y: datum.number(C::Y, 0.0)?,
        radius: datum.number(C::Radius, 0.0)?,
    });
    Mark::new("path")
        .attr("d", d)
        .attr("fill", datum.text(C::Fill, "transparent")?)
        .stroke(datum)
}

fn label(datum: &Datum<'_>) -> Result<Mark, Unresolved> {
    let x = datum.number(C::X, 0.0)?;
    let y = datum.number(C::Y, 0.0)?;
    let mut mark = Mark::new("text").number("x", x).number("y", y);
    if let Some(angle) = datum.optional_number(C::Rotation)? {
        mark = mark.attr(
            "transform",
            format!(
                "rotate({}, {}, {})",
                format_number(angle),
                format_number(x),
                format_number(y)
            ),
        );
    }
    let mut mark = mark
        .attr("text-anchor", datum.text(C::TextAnchor, "middle")?)
        .attr("dominant-baseline", datum.text(C::Baseline, "middle")?)
        .attr("fill", datum.text(C::Fill, "#000")?)
        .number("font-size", datum.number(C::Size, 16.0)?);
    mark.text = Some(datum.text(C::Text, "")?);
    Ok(mark)
}

fn segment(datum: &Datum<'_>, points: [(f64, f64); 2]) -> Result<Mark, Unresolved> {
    Mark::new("path")
        .attr("d", polyline(&points, false))
        .attr("fill", "none")
        .stroke(datum)
}

fn line(datum: &Datum<'_>) -> Result<Mark, Unresolved> {
    let from = (datum.number(C::X1, 0.0)?, datum.number(C::Y1, 0.0)?);
    let to = (datum.number(C::X2, 0.0)?, datum.number(C::Y2, 0.0)?);
    segment(datum, [from, to])
}

fn x_rule(datum: &Datum<'_>, area: &Bounds) -> Result<Mark, Unresolved> {
    let y = datum.number(C::Y, 0.0)?;
    segment(datum, [(area.x_min, y), (area.x_max, y)])
}

fn y_rule(datum: &Datum<'_>, area: &Bounds) -> Result<Mark, Unresolved> {
    let x = datum.number(C::X, 0.0)?;
    segment(datum, [(x, area.y_min), (x, area.y_max)])
}

/// Draw one element per record, or a single element without data.
pub(super) fn render(geom: &Geom, target: &mut dyn RenderTarget, group: NodeId, area: &Bounds) {
    let data: Vec<_> = match geom.records() {
        Some(records) => records.iter().map(Some).enumerate().collect(),
        None => vec![(0, None)],
    };

    let mut drawn = 0;
    for (index, record) in data {
        let datum = geom.datum(record, index);
        let mark = match geom.kind() {
            GeomKind::Point => point(&datum),
            GeomKind::Rectangle => rect(&datum),
            GeomKind::Circle => ring(&datum),
            GeomKind::Text => label(&datum),
            GeomKind::Line => line(&datum),
            GeomKind::XRule => x_rule(&datum, area),
            GeomKind::YRule => y_rule(&datum, area),
            GeomKind::Curve | GeomKind::Area => return,
        };
        match mark {
            Ok(mark) => {
                trace!("{} geom: datum {} -> <{}>", geom.kind(), index, mark.kind);
                mark.emit(target, group);
                drawn += 1;
            }
            Err(missing) => log_skipped(geom.kind(), index, missing),
        }
    }
    debug!("rendered {} geom with {} elements", geom.kind(), drawn);
}
