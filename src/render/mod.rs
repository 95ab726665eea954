// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Rendering curves onto a drawing surface.
//!
//! The editor core never talks to a real canvas. It issues primitive
//! calls through `DrawingSurface`, which the UI layer (or the SVG writer
//! in `svg.rs`) implements. `RecordingSurface` captures the calls for
//! tests and debugging.

mod drawing;
mod overlay;
mod recorder;
mod svg;

pub use drawing::{draw_controls, draw_curve};
pub use overlay::ControlOverlay;
pub use recorder::{DrawCommand, RecordingSurface};
pub use svg::SvgSurface;

use crate::path::CurveStyle;
use crate::settings;
use kurbo::{Circle, Point, Rect};

/// Dash pattern of a stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineDash {
    Solid,
    /// Alternating drawn and skipped lengths
    Dashed { on: f64, off: f64 },
}

/// How to stroke the current path
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    pub dash: LineDash,
}

impl StrokeStyle {
    /// Solid stroke in a curve's own color and width
    pub fn for_curve(style: &CurveStyle) -> Self {
        Self {
            color: style.color.clone(),
            width: style.width as f64,
            dash: LineDash::Solid,
        }
    }

    /// Solid thin stroke used to outline handle dots
    pub fn control_solid() -> Self {
        Self {
            color: settings::controls::COLOR.to_string(),
            width: settings::controls::LINE_WIDTH,
            dash: LineDash::Solid,
        }
    }

    /// Dashed thin stroke used for handle connector lines
    pub fn control_dashed() -> Self {
        let [on, off] = settings::controls::DASH;
        Self {
            dash: LineDash::Dashed { on, off },
            ..Self::control_solid()
        }
    }
}

/// Primitive drawing calls the editor needs from a canvas
pub trait DrawingSurface {
    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Start a new path, discarding any unstroked one
    fn begin_path(&mut self);

    /// Move the pen without drawing
    fn move_to(&mut self, point: Point);

    /// Add a straight line from the pen to `point`
    fn line_to(&mut self, point: Point);

    /// Stroke the current path
    fn stroke(&mut self, style: &StrokeStyle);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, color: &str);

    /// Draw a filled and outlined circle
    fn dot(&mut self, circle: Circle, style: &StrokeStyle);
}
