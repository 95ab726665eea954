// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Bezier Sketch: replay recorded edits and render the curves

fn main() -> anyhow::Result<()> {
    bezier_sketch::run()
}
