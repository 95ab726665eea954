// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer input for EditorSession - clicks add or pick points, moves
//! drag the picked point

use super::EditorSession;
use crate::path::ClickOutcome;
use kurbo::Point;

impl EditorSession {
    /// Handle a click at surface coordinates
    ///
    /// Goes to the active curve's select-or-add logic using the
    /// configured hit tolerance. Returns `None` when no curve is active.
    pub fn click(&mut self, position: Point) -> Option<ClickOutcome> {
        let tolerance = self.config.hit_tolerance;
        let curve = self.selected_curve_mut()?;
        let outcome = curve.select_or_add_point_within(position, tolerance);
        tracing::debug!(
            "Click at ({}, {}) -> {:?}",
            position.x,
            position.y,
            outcome
        );
        Some(outcome)
    }

    /// Handle pointer movement at surface coordinates
    ///
    /// Drags the selected point of the active curve, if there is one.
    pub fn pointer_moved(&mut self, position: Point) {
        if let Some(curve) = self.selected_curve_mut() {
            curve.move_selected_point(position);
        }
    }
}
