// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Stroke property inputs for EditorSession

use super::EditorSession;
use crate::error::{EditorError, Result};

/// Parse stroke width text as typed into the width input.
///
/// Surrounding whitespace is ignored. Anything that is not a positive
/// integer is rejected.
pub fn parse_line_width(text: &str) -> Result<u32> {
    match text.trim().parse::<u32>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(EditorError::InvalidLineWidth(text.to_string())),
    }
}

impl EditorSession {
    /// Apply the color input to the active curve
    ///
    /// The text is stored exactly as typed.
    pub fn apply_color(&mut self, color: &str) -> Result<()> {
        let curve = self.selected_curve_mut().ok_or(EditorError::NoCurveSelected)?;
        curve.set_color(color);
        tracing::debug!("Curve color set to {:?}", color);
        Ok(())
    }

    /// Apply the width input to the active curve
    ///
    /// Invalid text leaves the curve unchanged.
    pub fn apply_line_width(&mut self, text: &str) -> Result<()> {
        let width = parse_line_width(text).inspect_err(|err| tracing::warn!("{}", err))?;
        let curve = self.selected_curve_mut().ok_or(EditorError::NoCurveSelected)?;
        curve.set_line_width(width);
        tracing::debug!("Curve line width set to {}", width);
        Ok(())
    }
}
