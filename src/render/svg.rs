// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! SVG drawing surface.
//!
//! Each `stroke`, `fill_rect`, and `dot` call becomes one SVG element.
//! The current path is collected in a `BezPath` and written with its own
//! SVG path syntax. Colors are passed through as-is, so anything a
//! browser accepts as a CSS color works.

use super::{DrawingSurface, LineDash, StrokeStyle};
use kurbo::{BezPath, Circle, Point, Rect};

/// Surface that renders into an SVG document
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    elements: Vec<String>,
    path: BezPath,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
            path: BezPath::new(),
        }
    }

    /// The finished SVG document
    pub fn to_svg(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        out.push('\n');
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    fn stroke_attributes(style: &StrokeStyle) -> String {
        let attrs = format!(
            r#"stroke="{}" stroke-width="{}""#,
            escape_attribute(&style.color),
            style.width
        );
        match style.dash {
            LineDash::Dashed { on, off } => format!(r#"{attrs} stroke-dasharray="{on} {off}""#),
            LineDash::Solid => attrs,
        }
    }
}

impl DrawingSurface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
        self.path = BezPath::new();
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn move_to(&mut self, point: Point) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        self.path.line_to(point);
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        if self.path.elements().is_empty() {
            return;
        }
        self.elements.push(format!(
            r#"<path d="{}" fill="none" {}/>"#,
            self.path.to_svg(),
            Self::stroke_attributes(style)
        ));
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            escape_attribute(color)
        ));
    }

    fn dot(&mut self, circle: Circle, style: &StrokeStyle) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" {}/>"#,
            circle.center.x,
            circle.center.y,
            circle.radius,
            escape_attribute(&style.color),
            Self::stroke_attributes(style)
        ));
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
