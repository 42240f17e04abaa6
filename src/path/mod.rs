//! SVG path data builder.
//!
//! A [`Path`] accumulates drawing commands in call order and serializes them
//! to the SVG path mini-language: each command is its opcode followed by its
//! comma-joined operands, and commands are joined with single spaces.
//! Command ordering is not validated.

mod shapes;

pub use shapes::{Circle, Rect, circle, polyline, rectangle};

use std::fmt;

use crate::data::format_number;

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Move { x: f64, y: f64 },
    Line { x: f64, y: f64 },
    HLine { x: f64 },
    VLine { y: f64 },
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Quadratic { x1: f64, y1: f64, x: f64, y: f64 },
    Cubic {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

impl Command {
    pub fn opcode(&self) -> char {
        match self {
            Command::Move { .. } => 'M',
            Command::Line { .. } => 'L',
            Command::HLine { .. } => 'H',
            Command::VLine { .. } => 'V',
            Command::Arc { .. } => 'A',
            Command::Quadratic { .. } => 'Q',
            Command::Cubic { .. } => 'C',
            Command::Close => 'Z',
        }
    }

    /// Numeric operands in SVG order; arc flags are `0.0` or `1.0`.
    pub fn operands(&self) -> Vec<f64> {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        match *self {
            Command::Move { x, y } | Command::Line { x, y } => vec![x, y],
            Command::HLine { x } => vec![x],
            Command::VLine { y } => vec![y],
            Command::Arc {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                x,
                y,
            } => vec![rx, ry, rotation, flag(large_arc), flag(sweep), x, y],
            Command::Quadratic { x1, y1, x, y } => vec![x1, y1, x, y],
            Command::Cubic {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => vec![x1, y1, x2, y2, x, y],
            Command::Close => Vec::new(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands: Vec<String> = self.operands().into_iter().map(format_number).collect();
        write!(f, "{}{}", self.opcode(), operands.join(","))
    }
}

/// An append-only list of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the current point to `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(Command::Move { x, y })
    }

    /// Straight line to `(x, y)`.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(Command::Line { x, y })
    }

    /// Horizontal line to `x`.
    pub fn h_line(&mut self, x: f64) -> &mut Self {
        self.push(Command::HLine { x })
    }

    /// Vertical line to `y`.
    pub fn v_line(&mut self, y: f64) -> &mut Self {
        self.push(Command::VLine { y })
    }

    /// Elliptical arc to `(x, y)`.
    ///
    /// `rotation` is the ellipse rotation in degrees relative to the x axis;
    /// `large_arc` picks the larger of the two candidate arcs and `sweep`
    /// the clockwise one.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.push(Command::Arc {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            x,
            y,
        })
    }

    /// Quadratic Bézier to `(x, y)` with control point `(x1, y1)`.
    pub fn quadratic_curve(&mut self, x1: f64, y1: f64, x: f64, y: f64) -> &mut Self {
        self.push(Command::Quadratic { x1, y1, x, y })
    }

    /// Cubic Bézier to `(x, y)` with control points `(x1, y1)` and `(x2, y2)`.
    pub fn bezier_curve(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.push(Command::Cubic {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        })
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.push(Command::Close)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    fn push(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}
