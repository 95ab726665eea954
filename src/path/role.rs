// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Role of a control point, derived from its index.
//!
//! A curve stores its control points as one flat list:
//!
//! ```text
//! index:  0    1    2    3    4    5    6    7 ...
//! role:   A0   H    H    A1   H    H    A2   H ...
//! ```
//!
//! Index 0 is the first anchor, index 1 is its handle. After that the
//! list repeats in groups of three: incoming handle (`3k - 1`), anchor
//! (`3k`), outgoing handle (`3k + 1`). This is the only place that
//! knows about that stride.

/// What a control point does in the curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    /// On-curve point where segments meet (index 0 or `3k`)
    Anchor,

    /// The handle at index 1. Its anchor is the path's first point, which
    /// has no handle on the other side, so nothing mirrors it.
    FirstHandle,

    /// Any other handle, paired with a sibling across its anchor
    Handle {
        /// Index of the anchor this handle belongs to
        anchor: usize,
        /// Index of the handle on the other side of that anchor
        sibling: usize,
    },
}

impl PointRole {
    /// Whether this point lies on the curve
    pub fn is_anchor(&self) -> bool {
        matches!(self, PointRole::Anchor)
    }
}

/// Classify the point at `index`.
///
/// Indices past the end of a particular path are still classified; the
/// caller is expected to bounds-check `anchor` and `sibling` before
/// using them.
pub fn classify(index: usize) -> PointRole {
    match (index, index % 3) {
        (1, _) => PointRole::FirstHandle,
        (_, 0) => PointRole::Anchor,
        // Outgoing handle: anchor is just behind, sibling is the incoming
        // handle on the other side
        (_, 1) => PointRole::Handle {
            anchor: index - 1,
            sibling: index - 2,
        },
        // Incoming handle: anchor is just ahead
        _ => PointRole::Handle {
            anchor: index + 1,
            sibling: index + 2,
        },
    }
}
