// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editable chain of cubic bezier segments.
//!
//! A `CurvePath` owns a flat list of control points (see `role.rs` for
//! how indices map to anchors and handles) plus at most one selected
//! point. Clicking appends or selects points; moving the pointer drags
//! the selected point, dragging neighbors along so joints stay smooth.

use super::casteljau::{evaluate_cubic, mirror};
use super::role::{PointRole, classify};
use crate::settings;
use kurbo::{BezPath, Point, Rect};

/// Stroke style of a curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveStyle {
    /// Any stroke color string the drawing surface understands
    pub color: String,
    /// Stroke width in surface units
    pub width: u32,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            color: settings::curve::COLOR.to_string(),
            width: settings::curve::WIDTH,
        }
    }
}

/// What a click did to the curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A point was selected, so the click cleared the selection
    Deselected,
    /// An existing point was hit and is now selected
    Selected(usize),
    /// Nothing was hit; new points were appended and the last one selected
    Appended(usize),
}

/// A chain of cubic bezier segments under construction
#[derive(Debug, Clone, Default)]
pub struct CurvePath {
    points: Vec<Point>,
    selected: Option<usize>,
    style: CurveStyle,
}

impl CurvePath {
    /// Create an empty curve with the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty curve with the given style
    pub fn with_style(style: CurveStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// All control points in index order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the selected point, if any
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Position of the selected point, if any
    pub fn selected_point(&self) -> Option<Point> {
        self.selected.and_then(|index| self.points.get(index).copied())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn style(&self) -> &CurveStyle {
        &self.style
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.style.color = color.into();
    }

    pub fn set_line_width(&mut self, width: u32) {
        self.style.width = width;
    }

    // ===== EDITING =====

    /// Append a new anchor at `position`.
    ///
    /// The first call pushes the first anchor and its handle. Later calls
    /// push the incoming handle, the anchor, and the outgoing handle of
    /// the next segment. All new points start coincident at `position`
    /// and the last one is selected, so the following pointer moves pull
    /// a handle out of the new anchor.
    pub fn append_point(&mut self, position: Point) {
        let count = if self.points.is_empty() { 2 } else { 3 };
        self.points.extend(std::iter::repeat_n(position, count));
        let last = self.points.len() - 1;
        self.selected = Some(last);
        tracing::debug!(
            "Appended {} points at ({}, {}), selected index {}",
            count,
            position.x,
            position.y,
            last
        );
    }

    /// Handle a click with the default hit tolerance
    pub fn select_or_add_point(&mut self, position: Point) -> ClickOutcome {
        self.select_or_add_point_within(position, settings::hit_test::TOLERANCE)
    }

    /// Handle a click.
    ///
    /// A click while a point is selected only drops the selection.
    /// Otherwise the first point within `tolerance` is selected, or a new
    /// anchor is appended when nothing is close enough.
    pub fn select_or_add_point_within(&mut self, position: Point, tolerance: f64) -> ClickOutcome {
        if self.selected.take().is_some() {
            tracing::debug!("Click cleared point selection");
            return ClickOutcome::Deselected;
        }

        match self.find_nearby_point(position, tolerance) {
            Some((_, index)) => {
                self.selected = Some(index);
                tracing::debug!("Selected point {}", index);
                ClickOutcome::Selected(index)
            }
            None => {
                self.append_point(position);
                ClickOutcome::Appended(self.points.len() - 1)
            }
        }
    }

    /// Find the first point whose square hit box contains `position`.
    ///
    /// The box has half-width `tolerance` and is inclusive on every edge.
    /// Points are scanned in index order, so when several boxes overlap
    /// the lowest index wins.
    pub fn find_nearby_point(&self, position: Point, tolerance: f64) -> Option<(Point, usize)> {
        self.points
            .iter()
            .enumerate()
            .find(|(_, p)| {
                p.x - tolerance <= position.x
                    && position.x <= p.x + tolerance
                    && p.y - tolerance <= position.y
                    && position.y <= p.y + tolerance
            })
            .map(|(index, p)| (*p, index))
    }

    /// Drag the selected point to `new_position`.
    ///
    /// - Anchors carry both neighboring handles along by the same delta.
    /// - A handle reflects its sibling through their shared anchor, so the
    ///   two handles stay collinear with it.
    /// - The handle at index 1 has no sibling and moves alone.
    ///
    /// Does nothing when no point is selected.
    pub fn move_selected_point(&mut self, new_position: Point) {
        let Some(index) = self.selected else {
            return;
        };
        let Some(&current) = self.points.get(index) else {
            tracing::warn!(
                "Selected index {} out of range for {} points",
                index,
                self.points.len()
            );
            self.selected = None;
            return;
        };

        match classify(index) {
            PointRole::FirstHandle => {
                self.points[index] = new_position;
            }
            PointRole::Anchor => {
                let delta = new_position - current;
                if let Some(after) = self.points.get_mut(index + 1) {
                    *after += delta;
                }
                if index > 0 {
                    self.points[index - 1] += delta;
                }
                self.points[index] = new_position;
            }
            PointRole::Handle { anchor, sibling } => {
                self.points[index] = new_position;
                if let Some(&center) = self.points.get(anchor)
                    && sibling < self.points.len()
                {
                    self.points[sibling] = mirror(new_position, center);
                }
            }
        }
    }

    // ===== GEOMETRY =====

    /// Iterate over the complete cubic segments.
    ///
    /// Segment `k` is points `3k..=3k + 3`; neighbors share their boundary
    /// anchor. Trailing points that do not complete a segment are skipped.
    pub fn segments(&self) -> impl Iterator<Item = [Point; 4]> + '_ {
        let count = self.points.len().saturating_sub(1) / 3;
        (0..count).map(move |k| {
            let start = k * 3;
            [
                self.points[start],
                self.points[start + 1],
                self.points[start + 2],
                self.points[start + 3],
            ]
        })
    }

    /// Number of complete segments
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1) / 3
    }

    /// Flatten every complete segment into `resolution + 1` samples.
    ///
    /// Samples are taken at `t = j / resolution` for `j` in
    /// `0..=resolution` and concatenated in path order, so the shared
    /// anchor between two segments appears twice. The resolution is
    /// clamped to `1..=settings::sampling::MAX_RESOLUTION`.
    pub fn sample_curve(&self, resolution: u32) -> Vec<Point> {
        let resolution = resolution.clamp(1, settings::sampling::MAX_RESOLUTION);
        let mut samples = Vec::with_capacity(self.segment_count() * (resolution as usize + 1));
        for segment in self.segments() {
            samples.extend(
                (0..=resolution).map(|j| evaluate_cubic(&segment, j as f64 / resolution as f64)),
            );
        }
        samples
    }

    /// Flatten with the default resolution
    pub fn flatten(&self) -> Vec<Point> {
        self.sample_curve(settings::sampling::RESOLUTION)
    }

    /// Exact cubic outline of the complete segments
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        for (k, [p0, p1, p2, p3]) in self.segments().enumerate() {
            if k == 0 {
                path.move_to(p0);
            }
            path.curve_to(p1, p2, p3);
        }
        path
    }

    /// Bounding box of all control points
    pub fn bounding_box(&self) -> Option<Rect> {
        let (first, rest) = self.points.split_first()?;
        Some(
            rest.iter()
                .fold(Rect::from_points(*first, *first), |rect, p| rect.union_pt(*p)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Build a curve directly from points, nothing selected
    fn curve_from(points: &[Point]) -> CurvePath {
        CurvePath {
            points: points.to_vec(),
            selected: None,
            style: CurveStyle::default(),
        }
    }

    fn seven_points() -> CurvePath {
        curve_from(&[
            pt(0.0, 0.0),
            pt(0.0, 20.0),
            pt(5.0, 5.0),
            pt(10.0, 10.0),
            pt(15.0, 15.0),
            pt(40.0, 0.0),
            pt(50.0, 0.0),
        ])
    }

    #[test]
    fn append_lengths() {
        let mut curve = CurvePath::new();
        for n in 1..=6 {
            curve.append_point(pt(n as f64 * 50.0, 0.0));
            let expected = if n == 1 { 2 } else { 2 + 3 * (n - 1) };
            assert_eq!(curve.len(), expected, "after {n} appends");
        }
    }

    #[test]
    fn append_selects_last_and_points_coincide() {
        let mut curve = CurvePath::new();
        curve.append_point(pt(1.0, 2.0));
        assert_eq!(curve.selected_index(), Some(1));
        assert_eq!(curve.points(), &[pt(1.0, 2.0), pt(1.0, 2.0)]);

        curve.append_point(pt(30.0, 40.0));
        assert_eq!(curve.selected_index(), Some(4));
        assert_eq!(&curve.points()[2..], &[pt(30.0, 40.0); 3]);
    }

    #[test]
    fn click_toggles_selection() {
        let mut curve = CurvePath::new();
        assert_eq!(curve.select_or_add_point(pt(100.0, 100.0)), ClickOutcome::Appended(1));
        assert_eq!(curve.len(), 2);

        // Selected now, so the next click only deselects
        assert_eq!(curve.select_or_add_point(pt(300.0, 300.0)), ClickOutcome::Deselected);
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.selected_index(), None);
    }

    #[test]
    fn click_twice_on_existing_point() {
        let mut curve = seven_points();
        let before = curve.len();
        assert_eq!(curve.select_or_add_point(pt(50.0, 0.0)), ClickOutcome::Selected(6));
        assert_eq!(curve.select_or_add_point(pt(50.0, 0.0)), ClickOutcome::Deselected);
        assert_eq!(curve.len(), before);
        assert_eq!(curve.selected_index(), None);
    }

    #[test]
    fn click_miss_appends_triplet() {
        let mut curve = seven_points();
        assert_eq!(curve.select_or_add_point(pt(200.0, 200.0)), ClickOutcome::Appended(9));
        assert_eq!(curve.len(), 10);
        assert_eq!(curve.selected_point(), Some(pt(200.0, 200.0)));
    }

    #[test]
    fn hit_box_is_inclusive() {
        let curve = curve_from(&[pt(10.0, 10.0)]);
        assert_eq!(curve.find_nearby_point(pt(16.0, 4.0), 6.0), Some((pt(10.0, 10.0), 0)));
        assert_eq!(curve.find_nearby_point(pt(4.0, 16.0), 6.0), Some((pt(10.0, 10.0), 0)));
        assert_eq!(curve.find_nearby_point(pt(16.5, 10.0), 6.0), None);
        assert_eq!(curve.find_nearby_point(pt(10.0, 3.9), 6.0), None);
    }

    #[test]
    fn hit_test_prefers_lowest_index() {
        let curve = curve_from(&[pt(100.0, 100.0), pt(0.0, 0.0), pt(3.0, 3.0)]);
        // Closer to index 2, but index 1 is also in range
        assert_eq!(curve.find_nearby_point(pt(3.0, 3.0), 6.0), Some((pt(0.0, 0.0), 1)));
    }

    #[test]
    fn hit_test_coincident_points() {
        let mut curve = CurvePath::new();
        curve.append_point(pt(5.0, 5.0));
        curve.append_point(pt(5.0, 5.0));
        assert_eq!(curve.find_nearby_point(pt(5.0, 5.0), 6.0).map(|(_, i)| i), Some(0));
    }

    #[test]
    fn move_without_selection_is_noop() {
        let mut curve = seven_points();
        let before = curve.points().to_vec();
        curve.move_selected_point(pt(99.0, 99.0));
        assert_eq!(curve.points(), before.as_slice());
    }

    #[test]
    fn anchor_move_carries_handles() {
        let mut curve = seven_points();
        let before = curve.points().to_vec();
        curve.selected = Some(3);
        curve.move_selected_point(pt(13.0, 6.0));

        let delta = Vec2::new(3.0, -4.0);
        assert_eq!(curve.points()[3], pt(13.0, 6.0));
        assert_eq!(curve.points()[2], before[2] + delta);
        assert_eq!(curve.points()[4], before[4] + delta);
        assert_eq!(&curve.points()[..2], &before[..2]);
        assert_eq!(&curve.points()[5..], &before[5..]);
    }

    #[test]
    fn first_anchor_moves_only_its_handle() {
        let mut curve = seven_points();
        let before = curve.points().to_vec();
        curve.selected = Some(0);
        curve.move_selected_point(pt(2.0, 2.0));

        assert_eq!(curve.points()[0], pt(2.0, 2.0));
        assert_eq!(curve.points()[1], pt(2.0, 22.0));
        assert_eq!(&curve.points()[2..], &before[2..]);
    }

    #[test]
    fn outgoing_handle_mirrors_incoming() {
        let mut curve = seven_points();
        curve.selected = Some(4);
        curve.move_selected_point(pt(20.0, 20.0));

        assert_eq!(curve.points()[4], pt(20.0, 20.0));
        assert_eq!(curve.points()[2], pt(0.0, 0.0));
        assert_eq!(curve.points()[3], pt(10.0, 10.0));
    }

    #[test]
    fn incoming_handle_mirrors_outgoing() {
        let mut curve = seven_points();
        curve.selected = Some(2);
        curve.move_selected_point(pt(10.0, 0.0));

        assert_eq!(curve.points()[2], pt(10.0, 0.0));
        assert_eq!(curve.points()[4], pt(10.0, 20.0));
        assert_eq!(curve.points()[3], pt(10.0, 10.0));
    }

    #[test]
    fn first_handle_moves_alone() {
        let mut curve = seven_points();
        let before = curve.points().to_vec();
        curve.selected = Some(1);
        curve.move_selected_point(pt(-30.0, 70.0));

        assert_eq!(curve.points()[1], pt(-30.0, 70.0));
        for (i, (a, b)) in curve.points().iter().zip(&before).enumerate() {
            if i != 1 {
                assert_eq!(a, b, "index {i} changed");
            }
        }
    }

    #[test]
    fn drag_after_append_pulls_out_handle() {
        let mut curve = CurvePath::new();
        curve.append_point(pt(0.0, 0.0));
        curve.move_selected_point(pt(0.0, 50.0));
        curve.select_or_add_point(pt(0.0, 50.0));

        curve.select_or_add_point(pt(100.0, 0.0));
        assert_eq!(curve.selected_index(), Some(4));
        curve.move_selected_point(pt(120.0, 30.0));

        assert_eq!(
            curve.points(),
            &[
                pt(0.0, 0.0),
                pt(0.0, 50.0),
                pt(80.0, -30.0),
                pt(100.0, 0.0),
                pt(120.0, 30.0),
            ]
        );
    }

    #[test]
    fn stale_selection_is_cleared() {
        let mut curve = seven_points();
        curve.selected = Some(42);
        curve.move_selected_point(pt(1.0, 1.0));
        assert_eq!(curve.selected_index(), None);
    }

    #[test]
    fn segment_counts() {
        let cases = [(0, 0), (2, 0), (3, 0), (4, 1), (5, 1), (7, 2), (8, 2), (11, 3)];
        for (len, segments) in cases {
            let curve = curve_from(&vec![Point::ZERO; len]);
            assert_eq!(curve.segment_count(), segments, "len {len}");
            assert_eq!(curve.segments().count(), segments, "len {len}");
        }
    }

    #[test]
    fn segments_share_anchors() {
        let curve = seven_points();
        let segments: Vec<_> = curve.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0][3], segments[1][0]);
        assert_eq!(segments[1][3], pt(50.0, 0.0));
    }

    #[test]
    fn sample_count_per_segment() {
        let curve = seven_points();
        assert_eq!(curve.sample_curve(30).len(), 2 * 31);
        assert_eq!(curve.sample_curve(4).len(), 2 * 5);
        assert_eq!(curve.flatten().len(), 2 * 31);
    }

    #[test]
    fn samples_start_and_end_on_anchors() {
        let curve = seven_points();
        let samples = curve.sample_curve(10);
        assert_eq!(samples[0], pt(0.0, 0.0));
        assert_eq!(samples[10], pt(10.0, 10.0));
        assert_eq!(samples[11], pt(10.0, 10.0));
        assert_eq!(samples[21], pt(50.0, 0.0));
    }

    #[test]
    fn short_curves_have_no_samples() {
        let mut curve = CurvePath::new();
        assert!(curve.sample_curve(30).is_empty());
        curve.append_point(pt(1.0, 1.0));
        assert!(curve.sample_curve(30).is_empty());
        assert!(curve.to_bezpath().is_empty());
    }

    #[test]
    fn degenerate_curve_samples_coincide() {
        let mut curve = CurvePath::new();
        for _ in 0..4 {
            curve.append_point(Point::ZERO);
        }
        let samples = curve.sample_curve(30);
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|p| *p == Point::ZERO));
    }

    #[test]
    fn zero_resolution_is_clamped() {
        let curve = seven_points();
        assert_eq!(curve.sample_curve(0).len(), 2 * 2);
    }

    #[test]
    fn huge_resolution_is_clamped() {
        let curve = seven_points();
        let max = settings::sampling::MAX_RESOLUTION as usize;
        assert_eq!(curve.sample_curve(u32::MAX).len(), 2 * (max + 1));
    }

    #[test]
    fn bezpath_has_one_cubic_per_segment() {
        let curve = seven_points();
        let path = curve.to_bezpath();
        let cubics = path
            .elements()
            .iter()
            .filter(|el| matches!(el, kurbo::PathEl::CurveTo(..)))
            .count();
        assert_eq!(cubics, 2);
    }

    #[test]
    fn bounding_box_covers_controls() {
        assert_eq!(CurvePath::new().bounding_box(), None);
        let bbox = seven_points().bounding_box().unwrap();
        assert_eq!(bbox, Rect::new(0.0, 0.0, 50.0, 20.0));
    }

    #[test]
    fn style_setters() {
        let mut curve = CurvePath::new();
        assert_eq!(curve.style(), &CurveStyle::default());
        curve.set_color("rgb(10, 20, 30)");
        curve.set_line_width(7);
        assert_eq!(curve.style().color, "rgb(10, 20, 30)");
        assert_eq!(curve.style().width, 7);
    }
}
