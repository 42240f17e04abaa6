//! Plot (canvas) implementation.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::backend::{NodeId, RenderTarget, SvgDocument};
use crate::config::PlotConfig;
use crate::data::format_number;
use crate::element::{Axis, Bounds};
use crate::error::{PlotError, PlotResult};
use crate::geom::Geom;
use crate::scale::{Scale, ScaleMap};

/// A single fixed-margin plot: named scales, geoms and axes.
#[derive(Debug, Clone)]
pub struct Plot {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Inset of the drawing area on every side
    pub margin: f64,
    scales: ScaleMap,
    geoms: Vec<Geom>,
    axes: Vec<Axis>,
}

impl Plot {
    pub fn new(width: f64, height: f64) -> Self {
        Plot {
            width,
            height,
            margin: 0.0,
            scales: ScaleMap::new(),
            geoms: Vec::new(),
            axes: Vec::new(),
        }
    }

    /// Build scales, axes and geoms from a configuration.
    pub fn from_config(config: &PlotConfig) -> PlotResult<Self> {
        let mut plot = Plot::new(config.width, config.height).margin(config.margin);
        plot.check_size()?;

        for (name, scale) in &config.scales {
            let scale = Scale::new(scale).map_err(|e| match e {
                PlotError::InvalidConfig(msg) => {
                    PlotError::InvalidConfig(format!("scale '{}': {}", name, msg))
                }
                other => other,
            })?;
            plot.scales.insert(name.clone(), Arc::new(scale));
        }
        for geom in &config.geoms {
            let geom = Geom::from_config(geom, &plot.scales)?;
            plot.geoms.push(geom);
        }
        for axis in &config.axes {
            let axis = Axis::from_config(axis, &plot.scales)?;
            plot.axes.push(axis);
        }

        debug!(
            "plot {}x{} (margin {}): {} scales, {} geoms, {} axes",
            format_number(plot.width),
            format_number(plot.height),
            format_number(plot.margin),
            plot.scales.len(),
            plot.geoms.len(),
            plot.axes.len()
        );
        Ok(plot)
    }

    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Register a named scale.
    pub fn scale(mut self, name: impl Into<String>, scale: Scale) -> Self {
        self.scales.insert(name.into(), Arc::new(scale));
        self
    }

    pub fn geom(mut self, geom: Geom) -> Self {
        self.geoms.push(geom);
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    pub fn scales(&self) -> &ScaleMap {
        &self.scales
    }

    /// Look up a registered scale for sharing with geoms and axes.
    pub fn get_scale(&self, name: &str) -> Option<Arc<Scale>> {
        self.scales.get(name).cloned()
    }

    pub fn geoms(&self) -> &[Geom] {
        &self.geoms
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Drawing area inside the margins, in the translated coordinate system.
    pub fn area(&self) -> Bounds {
        Bounds::from_size(
            self.width - 2.0 * self.margin,
            self.height - 2.0 * self.margin,
        )
    }

    fn check_size(&self) -> PlotResult<()> {
        let finite = self.width.is_finite() && self.height.is_finite() && self.margin.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "plot size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.margin < 0.0
            || 2.0 * self.margin >= self.width
            || 2.0 * self.margin >= self.height
        {
            return Err(PlotError::InvalidConfig(format!(
                "margin {} leaves no drawing area in a {}x{} plot",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Render into `target`, returning the `svg` root element.
    pub fn render(
        &self,
        target: &mut dyn RenderTarget,
        parent: Option<NodeId>,
    ) -> PlotResult<NodeId> {
        self.check_size()?;
        let area = self.area();

        let scene = target.create_element("svg", parent);
        target.set_attribute(scene, "width", &format_number(self.width));
        target.set_attribute(scene, "height", &format_number(self.height));
        target.set_attribute(scene, "xmlns", "http://www.w3.org/2000/svg");
        target.set_attribute(scene, "style", "user-select: none");

        let group = target.create_element("g", Some(scene));
        target.set_attribute(
            group,
            "transform",
            &format!(
                "translate({},{})",
                format_number(self.margin),
                format_number(self.margin)
            ),
        );

        for geom in &self.geoms {
            geom.render(target, Some(group), &area)?;
        }
        for axis in &self.axes {
            axis.render(target, Some(group), &area)?;
        }

        debug!(
            "rendered plot with {} geoms and {} axes into a {}x{} area",
            self.geoms.len(),
            self.axes.len(),
            format_number(area.width()),
            format_number(area.height())
        );
        Ok(scene)
    }

    /// Render into a fresh in-memory document.
    pub fn to_document(&self) -> PlotResult<SvgDocument> {
        let mut doc = SvgDocument::new();
        self.render(&mut doc, None)?;
        Ok(doc)
    }

    /// Render to SVG text, with an XML declaration.
    pub fn to_svg(&self) -> PlotResult<String> {
        Ok(self.to_document()?.render())
    }

    /// Save the plot to a file.
    pub fn save(&self, path: impl AsRef<Path>, include_declaration: bool) -> PlotResult<()> {
        let svg = self
            .to_document()?
            .include_declaration(include_declaration)
            .render();
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        Ok(())
    }
}

impl Default for Plot {
    fn default() -> Self {
        Plot::new(500.0, 500.0)
    }
}
