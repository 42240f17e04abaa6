//! Declarative 2D charting.
//!
//! Scales map data values onto pixels, a nice-number generator picks tick
//! values, and curve generators turn point streams into SVG path data.
//! Geoms and axes render through a [`RenderTarget`]; [`SvgDocument`] is the
//! in-memory implementation.
//!
//! ```no_run
//! use vizkit::prelude::*;
//!
//! let x = Scale::new(&ScaleConfig::linear([0.0, 10.0], [0.0, 480.0]))?;
//! let plot = Plot::new(500.0, 300.0)
//!     .margin(10.0)
//!     .scale("x", x);
//! let xs = plot.get_scale("x").unwrap();
//! let plot = plot.geom(
//!     Geom::new(GeomKind::Point)
//!         .data(vec![record([("v", 2.0)]), record([("v", 7.5)])])
//!         .encode(ChannelName::X, Accessor::scaled("v", xs))
//!         .encode(ChannelName::Y, Accessor::constant(140.0)),
//! );
//! let svg = plot.to_svg()?;
//! # Ok::<(), vizkit::PlotError>(())
//! ```

pub mod backend;
pub mod config;
pub mod curve;
pub mod data;
pub mod element;
pub mod error;
pub mod figure;
pub mod geom;
pub mod path;
pub mod scale;
pub mod schema;

pub use backend::{NodeId, RenderTarget, SvgDocument};
pub use config::PlotConfig;
pub use error::{PlotError, PlotResult};
pub use figure::Plot;

pub mod prelude {
    pub use crate::backend::{NodeId, RenderTarget, SvgDocument};
    pub use crate::config::PlotConfig;
    pub use crate::curve::{Curve, CurveKind, curve};
    pub use crate::data::{Accessor, Channel, Record, Value, record};
    pub use crate::element::{Axis, AxisConfig, AxisPosition, Bounds};
    pub use crate::error::{PlotError, PlotResult};
    pub use crate::figure::Plot;
    pub use crate::geom::{ChannelName, Geom, GeomConfig, GeomKind};
    pub use crate::path::{Circle, Path, Rect, circle, polyline, rectangle};
    pub use crate::scale::{Scale, ScaleConfig, ScaleKind, nice_number, ticks};
}
