//! Static shape outlines expressed as path data.

use super::Path;

/// A rectangle with optionally rounded corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: Option<f64>,
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Path through `points`, optionally closed. No points yield an empty string.
pub fn polyline(points: &[(f64, f64)], closed: bool) -> String {
    let mut path = Path::new();
    if let Some(&(x, y)) = points.first() {
        path.move_to(x, y);
        for &(x, y) in &points[1..] {
            path.line_to(x, y);
        }
        if closed {
            path.close();
        }
    }
    path.to_string()
}

/// Rectangle outline.
///
/// Rounded corners are drawn clockwise from just right of the top-left
/// corner; a missing, zero or oversized radius falls back to a plain closed
/// polyline.
pub fn rectangle(rect: &Rect) -> String {
    let Rect {
        x,
        y,
        width,
        height,
        radius,
    } = *rect;
    let r = match radius {
        Some(r) if r != 0.0 && width >= 2.0 * r && height >= 2.0 * r => r,
        _ => {
            let corners = [
                (x, y),
                (x + width, y),
                (x + width, y + height),
                (x, y + height),
            ];
            return polyline(&corners, true);
        }
    };

    let mut path = Path::new();
    path.move_to(x + r, y)
        .h_line(x + width - r)
        .arc(r, r, 0.0, false, true, x + width, y + r)
        .v_line(y + height - r)
        .arc(r, r, 0.0, false, true, x + width - r, y + height)
        .h_line(x + r)
        .arc(r, r, 0.0, false, true, x, y + height - r)
        .v_line(y + r)
        .arc(r, r, 0.0, false, true, x + r, y)
        .close();
    path.to_string()
}

/// Circle outline made of two half arcs starting at the leftmost point.
pub fn circle(circle: &Circle) -> String {
    let Circle { x, y, radius: r } = *circle;
    let mut path = Path::new();
    path.move_to(x - r, y)
        .arc(r, r, 0.0, true, true, x + r, y)
        .arc(r, r, 0.0, true, true, x - r, y)
        .close();
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline() {
        assert_eq!(polyline(&[], true), "");
        assert_eq!(polyline(&[(1.0, 2.0)], false), "M1,2");
        assert_eq!(
            polyline(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)], true),
            "M0,0 L5,0 L5,5 Z"
        );
    }

    #[test]
    fn test_zero_radius_rectangle_is_polyline() {
        let rect = Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            radius: Some(0.0),
        };
        let expected = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], true);
        assert_eq!(rectangle(&rect), expected);
        assert_eq!(rectangle(&Rect { radius: None, ..rect }), expected);
    }

    #[test]
    fn test_oversized_radius_degrades() {
        let rect = Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 4.0,
            radius: Some(3.0),
        };
        assert!(!rectangle(&rect).contains('A'));
    }

    #[test]
    fn test_rounded_rectangle() {
        let rect = Rect {
            x: 0.0,
            y: 0.0,
            width: 20.0,
            height: 10.0,
            radius: Some(2.0),
        };
        assert_eq!(
            rectangle(&rect),
            "M2,0 H18 A2,2,0,0,1,20,2 V8 A2,2,0,0,1,18,10 H2 A2,2,0,0,1,0,8 V2 A2,2,0,0,1,2,0 Z"
        );
    }

    #[test]
    fn test_circle() {
        let path = circle(&Circle {
            x: 10.0,
            y: 10.0,
            radius: 5.0,
        });
        assert_eq!(path, "M5,10 A5,5,0,1,1,15,10 A5,5,0,1,1,5,10 Z");
    }
}
