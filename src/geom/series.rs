//! Geoms drawing a single path through all records.

use log::debug;

use super::{ChannelName as C, Datum, Geom, Unresolved, log_skipped};
use crate::backend::{NodeId, RenderTarget};
use crate::curve::{Curve, CurveKind};
use crate::data::{Record, format_number};
use crate::path::Path;

/// Stroke attributes, read from the first record. Unresolved channels fall
/// back to their defaults.
fn stroke(geom: &Geom, first: Option<&Record>) -> Vec<(&'static str, String)> {
    let datum = geom.datum(first, 0);
    vec![
        (
            "stroke",
            datum
                .text(C::StrokeColor, "#000")
                .unwrap_or_else(|_| "#000".to_string()),
        ),
        (
            "stroke-width",
            format_number(datum.number(C::StrokeWidth, 1.0).unwrap_or(1.0)),
        ),
    ]
}

fn new_curve<'p>(geom: &Geom, path: &'p mut Path) -> Curve<'p> {
    match (geom.curve, geom.smoothness) {
        (CurveKind::CatmullRom, Some(smoothness)) => Curve::catmull_rom(path, smoothness),
        (kind, _) => Curve::new(kind, path),
    }
}

/// Feed the point of every record, in the given order, skipping records
/// whose coordinates do not resolve.
fn feed<'a>(
    geom: &Geom,
    curve: &mut Curve<'_>,
    records: impl Iterator<Item = (usize, &'a Record)>,
    x: C,
    y: C,
) -> usize {
    let mut fed = 0;
    for (index, record) in records {
        let datum = geom.datum(Some(record), index);
        match coordinates(&datum, x, y) {
            Ok((px, py)) => {
                curve.point(px, py);
                fed += 1;
            }
            Err(missing) => log_skipped(geom.kind, index, missing),
        }
    }
    fed
}

fn coordinates(datum: &Datum<'_>, x: C, y: C) -> Result<(f64, f64), Unresolved> {
    Ok((datum.number(x, 0.0)?, datum.number(y, 0.0)?))
}

fn emit(
    target: &mut dyn RenderTarget,
    group: NodeId,
    d: &Path,
    style: Vec<(&'static str, String)>,
) {
    let node = target.create_element("path", Some(group));
    for (name, value) in &style {
        target.set_attribute(node, name, value);
    }
    target.set_attribute(node, "d", &d.to_string());
}

/// Open path through `(x, y)` of every record. Needs at least two records.
pub(super) fn curve(geom: &Geom, target: &mut dyn RenderTarget, group: NodeId) {
    let records = geom.records().unwrap_or_default();
    let mut style = vec![("fill", "none".to_string())];
    style.extend(stroke(geom, records.first()));

    let mut path = Path::new();
    if records.len() >= 2 {
        let mut curve = new_curve(geom, &mut path);
        let fed = feed(geom, &mut curve, records.iter().enumerate(), C::X, C::Y);
        curve.end();
        debug!("curve geom ({}) through {} points", geom.curve, fed);
    } else {
        debug!("curve geom needs at least 2 records, got {}", records.len());
    }
    emit(target, group, &path, style);
}

/// Closed band: forward along `(x1, y1)`, back along `(x2, y2)`.
pub(super) fn area(geom: &Geom, target: &mut dyn RenderTarget, group: NodeId) {
    let records = geom.records().unwrap_or_default();
    let fill = geom
        .datum(records.first(), 0)
        .text(C::Fill, "#000")
        .unwrap_or_else(|_| "#000".to_string());
    let mut style = vec![("fill", fill)];
    style.extend(stroke(geom, records.first()));

    let mut path = Path::new();
    if records.len() >= 2 {
        let mut curve = new_curve(geom, &mut path);
        let forward = feed(geom, &mut curve, records.iter().enumerate(), C::X1, C::Y1);
        curve.end();
        let reverse = feed(geom, &mut curve, records.iter().enumerate().rev(), C::X2, C::Y2);
        curve.end();
        path.close();
        debug!(
            "area geom ({}) with {} forward and {} reverse points",
            geom.curve, forward, reverse
        );
    } else {
        debug!("area geom needs at least 2 records, got {}", records.len());
    }
    emit(target, group, &path, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SvgDocument;
    use crate::data::{Accessor, record};
    use crate::element::Bounds;
    use crate::geom::GeomKind;

    fn draw(geom: &Geom) -> SvgDocument {
        let mut doc = SvgDocument::new();
        geom.render(&mut doc, None, &Bounds::from_size(100.0, 100.0))
            .unwrap();
        doc
    }

    fn path_of(doc: &SvgDocument) -> String {
        let paths = doc.find_all("path");
        assert_eq!(paths.len(), 1);
        doc.element(paths[0])
            .and_then(|e| e.attribute("d"))
            .unwrap_or_default()
            .to_string()
    }

    fn series() -> Vec<Record> {
        vec![
            record([("x", 0.0), ("y", 10.0), ("lo", 0.0)]),
            record([("x", 5.0), ("y", 20.0), ("lo", 2.0)]),
            record([("x", 10.0), ("y", 15.0), ("lo", 1.0)]),
        ]
    }

    #[test]
    fn test_linear_curve() {
        let geom = Geom::new(GeomKind::Curve)
            .data(series())
            .encode(C::X, Accessor::field("x"))
            .encode(C::Y, Accessor::field("y"))
            .encode(C::StrokeColor, Accessor::constant("steelblue"));
        let doc = draw(&geom);
        assert_eq!(path_of(&doc), "M0,10 L5,20 L10,15");
        let node = doc.find_all("path")[0];
        let element = doc.element(node).unwrap();
        assert_eq!(element.attribute("fill"), Some("none"));
        assert_eq!(element.attribute("stroke"), Some("steelblue"));
    }

    #[test]
    fn test_curve_needs_two_records() {
        let geom = Geom::new(GeomKind::Curve)
            .data(vec![record([("x", 1.0), ("y", 1.0)])])
            .encode(C::X, Accessor::field("x"))
            .encode(C::Y, Accessor::field("y"));
        assert_eq!(path_of(&draw(&geom)), "");
        assert_eq!(path_of(&draw(&Geom::new(GeomKind::Curve))), "");
    }

    #[test]
    fn test_curve_skips_unresolved_points() {
        let mut data = series();
        data[1].remove("y");
        let geom = Geom::new(GeomKind::Curve)
            .data(data)
            .encode(C::X, Accessor::field("x"))
            .encode(C::Y, Accessor::field("y"));
        assert_eq!(path_of(&draw(&geom)), "M0,10 L10,15");
    }

    #[test]
    fn test_catmull_rom_curve_passes_through_points() {
        let geom = Geom::new(GeomKind::Curve)
            .curve(CurveKind::CatmullRom)
            .data(series())
            .encode(C::X, Accessor::field("x"))
            .encode(C::Y, Accessor::field("y"));
        let d = path_of(&draw(&geom));
        assert!(d.starts_with("M0,10 C"));
        assert!(d.contains(",5,20 C"));
        assert!(d.ends_with(",10,15"));
    }

    #[test]
    fn test_area_outline() {
        let geom = Geom::new(GeomKind::Area)
            .data(series())
            .encode(C::X1, Accessor::field("x"))
            .encode(C::Y1, Accessor::field("y"))
            .encode(C::X2, Accessor::field("x"))
            .encode(C::Y2, Accessor::field("lo"));
        let doc = draw(&geom);
        assert_eq!(
            path_of(&doc),
            "M0,10 L5,20 L10,15 L10,1 L5,2 L0,0 Z"
        );
        let element = doc.element(doc.find_all("path")[0]).unwrap();
        assert_eq!(element.attribute("fill"), Some("#000"));
    }

    #[test]
    fn test_catmull_rom_area_stays_connected() {
        let geom = Geom::new(GeomKind::Area)
            .curve(CurveKind::CatmullRom)
            .smoothness(0.5)
            .data(series())
            .encode(C::X1, Accessor::field("x"))
            .encode(C::Y1, Accessor::field("y"))
            .encode(C::X2, Accessor::field("x"))
            .encode(C::Y2, Accessor::field("lo"));
        let d = path_of(&draw(&geom));
        assert_eq!(d.matches('M').count(), 1);
        assert!(d.contains(" L10,1 C"));
        assert!(d.ends_with(" Z"));
    }
}
