// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod script;
pub mod session;

pub use script::{EditEvent, EventScript};
pub use session::{EditorSession, parse_line_width};
