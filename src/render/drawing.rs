// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Standalone drawing functions for curves and their control overlay

use super::{ControlOverlay, DrawingSurface, StrokeStyle};
use crate::path::CurvePath;
use crate::settings;

/// Stroke the flattened curve as a polyline in the curve's own style.
///
/// Curves without a complete segment draw nothing.
pub fn draw_curve(curve: &CurvePath, surface: &mut impl DrawingSurface, resolution: u32) {
    let samples = curve.sample_curve(resolution);
    let Some((first, rest)) = samples.split_first() else {
        return;
    };

    surface.begin_path();
    surface.move_to(*first);
    for point in rest {
        surface.line_to(*point);
    }
    surface.stroke(&StrokeStyle::for_curve(curve.style()));
}

/// Draw anchor markers, handle dots, and dashed handle lines
pub fn draw_controls(curve: &CurvePath, surface: &mut impl DrawingSurface) {
    let overlay = ControlOverlay::from_curve(curve);

    for marker in overlay.anchor_markers() {
        surface.fill_rect(marker, settings::controls::COLOR);
    }

    let solid = StrokeStyle::control_solid();
    for dot in overlay.handle_dots() {
        surface.dot(dot, &solid);
    }

    if overlay.handle_lines.is_empty() {
        return;
    }
    let dashed = StrokeStyle::control_dashed();
    surface.begin_path();
    for line in &overlay.handle_lines {
        surface.move_to(line.p0);
        surface.line_to(line.p1);
    }
    surface.stroke(&dashed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, LineDash, RecordingSurface};
    use kurbo::Point;

    fn one_segment_curve() -> CurvePath {
        let mut curve = CurvePath::new();
        curve.append_point(Point::new(0.0, 0.0));
        curve.move_selected_point(Point::new(0.0, 50.0));
        curve.deselect();
        curve.append_point(Point::new(100.0, 0.0));
        curve.set_color("teal");
        curve.set_line_width(5);
        curve
    }

    #[test]
    fn curve_is_one_solid_polyline() {
        let mut surface = RecordingSurface::new();
        draw_curve(&one_segment_curve(), &mut surface, 10);

        let commands = surface.commands();
        assert_eq!(commands.first(), Some(&DrawCommand::BeginPath));
        let line_tos = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::LineTo(_)))
            .count();
        assert_eq!(line_tos, 10);
        assert_eq!(
            commands.last(),
            Some(&DrawCommand::Stroke(StrokeStyle {
                color: "teal".to_string(),
                width: 5.0,
                dash: LineDash::Solid,
            }))
        );
    }

    #[test]
    fn incomplete_curve_draws_nothing() {
        let mut curve = CurvePath::new();
        curve.append_point(Point::new(3.0, 3.0));

        let mut surface = RecordingSurface::new();
        draw_curve(&curve, &mut surface, 30);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn controls_for_one_segment() {
        let mut surface = RecordingSurface::new();
        draw_controls(&one_segment_curve(), &mut surface);

        let commands = surface.commands();
        let rects = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count();
        let dots = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Dot { .. }))
            .count();
        assert_eq!(rects, 2);
        assert_eq!(dots, 3);
        assert_eq!(
            commands.last(),
            Some(&DrawCommand::Stroke(StrokeStyle::control_dashed()))
        );
    }

    #[test]
    fn controls_for_empty_curve() {
        let mut surface = RecordingSurface::new();
        draw_controls(&CurvePath::new(), &mut surface);
        assert!(surface.commands().is_empty());
    }
}
