// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve model - the editable representation.
//!
//! A `CurvePath` is a flat list of `kurbo::Point`s read as a chain of
//! cubic segments. `role` maps indices to anchors and handles,
//! `casteljau` evaluates segments for display.

pub mod casteljau;
pub mod curve;
pub mod role;

pub use casteljau::{de_casteljau, evaluate_cubic, mirror};
pub use curve::{ClickOutcome, CurvePath, CurveStyle};
pub use role::{PointRole, classify};
