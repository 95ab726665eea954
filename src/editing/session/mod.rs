// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - owns every curve on the canvas and which one is active

mod path_editing;
mod properties;

pub use properties::parse_line_width;

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::path::{CurvePath, CurveStyle};
use crate::render::{DrawingSurface, draw_controls, draw_curve};

/// Editing state for one canvas
///
/// This is the state the UI layer holds between events. Every action the
/// UI offers (click, pointer move, curve list buttons, property inputs)
/// is a method here, and `redraw` repaints everything afterwards.
#[derive(Debug, Clone)]
pub struct EditorSession {
    /// All curves, in curve-list order
    curves: Vec<CurvePath>,

    /// Index into `curves` of the curve receiving clicks and moves
    selected_curve: Option<usize>,

    /// Sampling, hit-testing, and default-style settings
    config: EditorConfig,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    /// Create a session holding one empty, selected curve
    pub fn new(config: EditorConfig) -> Self {
        let mut session = Self {
            curves: Vec::new(),
            selected_curve: None,
            config,
        };
        session.add_curve();
        session
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn curves(&self) -> &[CurvePath] {
        &self.curves
    }

    pub fn selected_curve_index(&self) -> Option<usize> {
        self.selected_curve
    }

    pub fn selected_curve(&self) -> Option<&CurvePath> {
        self.selected_curve.and_then(|index| self.curves.get(index))
    }

    fn selected_curve_mut(&mut self) -> Option<&mut CurvePath> {
        self.selected_curve.and_then(|index| self.curves.get_mut(index))
    }

    // ===== CURVE LIST =====

    /// Add an empty curve with the configured default style and select it
    ///
    /// Returns the index of the new curve.
    pub fn add_curve(&mut self) -> usize {
        let style = CurveStyle {
            color: self.config.curve_color.clone(),
            width: self.config.curve_width,
        };
        self.curves.push(CurvePath::with_style(style));
        let index = self.curves.len() - 1;
        self.selected_curve = Some(index);
        tracing::info!("Added curve {} ({} total)", index + 1, self.curves.len());
        index
    }

    /// Make `index` the active curve
    pub fn select_curve(&mut self, index: usize) -> Result<()> {
        if index >= self.curves.len() {
            return Err(EditorError::CurveIndexOutOfRange {
                index,
                count: self.curves.len(),
            });
        }
        self.selected_curve = Some(index);
        tracing::debug!("Selected curve {}", index + 1);
        Ok(())
    }

    /// Remove the active curve and return it
    ///
    /// Afterwards no curve is selected. With no curve selected this is
    /// a no-op that reports `NoCurveSelected`.
    pub fn remove_selected_curve(&mut self) -> Result<CurvePath> {
        let index = self
            .selected_curve
            .filter(|&index| index < self.curves.len())
            .ok_or(EditorError::NoCurveSelected)?;
        let removed = self.curves.remove(index);
        self.selected_curve = None;
        tracing::info!("Removed curve {} ({} left)", index + 1, self.curves.len());
        Ok(removed)
    }

    /// Display labels for the curve list: "Curve 1", "Curve 2", ...
    pub fn curve_labels(&self) -> Vec<String> {
        (1..=self.curves.len()).map(|n| format!("Curve {n}")).collect()
    }

    /// One line per curve: label, point and segment counts, control
    /// point bounds, and the exact cubic outline as SVG path data
    pub fn describe_curves(&self) -> Vec<String> {
        self.curve_labels()
            .into_iter()
            .zip(&self.curves)
            .map(|(label, curve)| {
                let bounds = curve.bounding_box().map_or_else(
                    || "none".to_string(),
                    |r| format!("({}, {})-({}, {})", r.x0, r.y0, r.x1, r.y1),
                );
                format!(
                    "{label}: {} points, {} segments, bounds {bounds}, outline \"{}\"",
                    curve.len(),
                    curve.segment_count(),
                    curve.to_bezpath().to_svg()
                )
            })
            .collect()
    }

    // ===== RENDERING =====

    /// Clear the surface and draw every curve, plus the control overlay
    /// of the active curve
    pub fn redraw(&self, surface: &mut impl DrawingSurface) {
        surface.clear();
        for (index, curve) in self.curves.iter().enumerate() {
            draw_curve(curve, surface, self.config.segment_resolution);
            if Some(index) == self.selected_curve {
                draw_controls(curve, surface);
            }
        }
    }
}
