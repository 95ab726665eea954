// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! These are the compile-time defaults. Every value here can be
//! overridden at runtime through an `EditorConfig` loaded from TOML
//! (see `config.rs`).

// ============================================================================
// CURVE SAMPLING
// ============================================================================
/// Number of De Casteljau evaluations per cubic segment
const SEGMENT_RESOLUTION: u32 = 30;

/// Upper bound on samples per segment
const MAX_SEGMENT_RESOLUTION: u32 = 10_000;

// ============================================================================
// HIT TESTING
// ============================================================================
/// Half-width of the square box around a point that counts as a hit
const HIT_TOLERANCE: f64 = 6.0;

// ============================================================================
// CURVE STYLE
// ============================================================================
/// Stroke color for newly created curves
const DEFAULT_CURVE_COLOR: &str = "#6b42f4";

/// Stroke width for newly created curves
const DEFAULT_CURVE_WIDTH: u32 = 2;

// ============================================================================
// CONTROL OVERLAY
// ============================================================================
/// Radius of the dot drawn on handle points
const HANDLE_DOT_RADIUS: f64 = 3.0;

/// Half-width of the square marker drawn on anchor points
const ANCHOR_MARKER_HALF_WIDTH: f64 = 4.0;

/// Dash pattern for handle connector lines (on, off)
const HANDLE_LINE_DASH: [f64; 2] = [10.0, 10.0];

/// Color of markers, dots, and connector lines
const CONTROL_COLOR: &str = "black";

/// Stroke width of connector lines and dot outlines
const CONTROL_LINE_WIDTH: f64 = 1.0;

// ============================================================================
// DRAWING SURFACE
// ============================================================================
/// Default surface width for exported drawings
const CANVAS_WIDTH: f64 = 800.0;

/// Default surface height for exported drawings
const CANVAS_HEIGHT: f64 = 600.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Curve flattening settings
pub mod sampling {
    /// Samples per segment are `RESOLUTION + 1` (both endpoints included)
    pub const RESOLUTION: u32 = super::SEGMENT_RESOLUTION;
    pub const MAX_RESOLUTION: u32 = super::MAX_SEGMENT_RESOLUTION;
}

/// Click hit-testing settings
pub mod hit_test {
    /// Inclusive half-width of the hit box, in surface units
    pub const TOLERANCE: f64 = super::HIT_TOLERANCE;
}

/// Default style applied to new curves
pub mod curve {
    pub const COLOR: &str = super::DEFAULT_CURVE_COLOR;
    pub const WIDTH: u32 = super::DEFAULT_CURVE_WIDTH;
}

/// Control overlay (anchor markers, handle dots, dashed connectors)
pub mod controls {
    pub const DOT_RADIUS: f64 = super::HANDLE_DOT_RADIUS;
    pub const MARKER_HALF_WIDTH: f64 = super::ANCHOR_MARKER_HALF_WIDTH;
    pub const DASH: [f64; 2] = super::HANDLE_LINE_DASH;
    pub const COLOR: &str = super::CONTROL_COLOR;
    pub const LINE_WIDTH: f64 = super::CONTROL_LINE_WIDTH;
}

/// Drawing surface size used by the command-line renderer
pub mod canvas {
    pub const WIDTH: f64 = super::CANVAS_WIDTH;
    pub const HEIGHT: f64 = super::CANVAS_HEIGHT;
}
