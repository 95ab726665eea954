// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! De Casteljau evaluation and point reflection

use kurbo::Point;

/// Evaluate a bezier curve of any degree at parameter `t`.
///
/// Each pass blends neighboring points with weights `(1 - t, t)`,
/// producing a list one shorter than the last, until a single point is
/// left. Works per coordinate, so `D` can be any dimension. Values of `t`
/// outside `0..=1` extrapolate.
///
/// Returns `None` only for an empty control polygon.
pub fn de_casteljau<const D: usize>(control: &[[f64; D]], t: f64) -> Option<[f64; D]> {
    let mut level = control.to_vec();
    while level.len() > 1 {
        level = level
            .windows(2)
            .map(|pair| {
                let mut blended = [0.0; D];
                for (axis, value) in blended.iter_mut().enumerate() {
                    *value = pair[0][axis] * (1.0 - t) + pair[1][axis] * t;
                }
                blended
            })
            .collect();
    }
    level.first().copied()
}

/// Evaluate one cubic segment at `t`
pub fn evaluate_cubic(segment: &[Point; 4], t: f64) -> Point {
    let control = segment.map(|p| [p.x, p.y]);
    // A four-point polygon always reduces to a point
    let [x, y] = de_casteljau(&control, t).unwrap_or(control[0]);
    Point::new(x, y)
}

/// Reflect `point` through `center`, so `center` ends up halfway
/// between `point` and the result.
pub fn mirror(point: Point, center: Point) -> Point {
    center + (center - point)
}
