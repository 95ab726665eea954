// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Control overlay geometry for the selected curve

use crate::path::{CurvePath, classify};
use crate::settings;
use kurbo::{Circle, Line, Point, Rect};

/// Everything drawn on top of a selected curve so its points can be
/// grabbed: a square marker per anchor, a dot per handle, and a dashed
/// line joining each handle pair through its anchor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlOverlay {
    pub anchors: Vec<Point>,
    pub handles: Vec<Point>,
    pub handle_lines: Vec<Line>,
}

impl ControlOverlay {
    /// Collect the overlay for `curve`.
    ///
    /// Curves with fewer than two points have no overlay.
    pub fn from_curve(curve: &CurvePath) -> Self {
        let points = curve.points();
        let mut overlay = Self::default();
        if points.len() < 2 {
            return overlay;
        }

        for (index, &point) in points.iter().enumerate() {
            if !classify(index).is_anchor() {
                overlay.handles.push(point);
                continue;
            }
            overlay.anchors.push(point);
            if let Some(line) = Self::handle_line(points, index) {
                overlay.handle_lines.push(line);
            }
        }
        overlay
    }

    /// The first anchor connects to its own handle; every later anchor
    /// connects its incoming handle to its outgoing one.
    fn handle_line(points: &[Point], anchor: usize) -> Option<Line> {
        if anchor == 0 {
            let handle = points.get(1)?;
            Some(Line::new(points[0], *handle))
        } else {
            let before = points.get(anchor - 1)?;
            let after = points.get(anchor + 1)?;
            Some(Line::new(*before, *after))
        }
    }

    /// Square markers for the anchors
    pub fn anchor_markers(&self) -> impl Iterator<Item = Rect> + '_ {
        let size = settings::controls::MARKER_HALF_WIDTH * 2.0;
        self.anchors
            .iter()
            .map(move |p| Rect::from_center_size(*p, (size, size)))
    }

    /// Dots for the handles
    pub fn handle_dots(&self) -> impl Iterator<Item = Circle> + '_ {
        self.handles
            .iter()
            .map(|p| Circle::new(*p, settings::controls::DOT_RADIUS))
    }
}
