// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Recorded input events, replayed against an `EditorSession`.
//!
//! This is the command-line stand-in for a live canvas: a TOML file
//! lists the events a user would produce, in order.
//!
//! ```toml
//! [[event]]
//! action = "click"
//! x = 50
//! y = 300
//!
//! [[event]]
//! action = "move"
//! x = 50
//! y = 100
//!
//! [[event]]
//! action = "width"
//! value = "4"
//! ```
//!
//! `select_curve` takes the 0-based index into the curve list.

use super::EditorSession;
use crate::error::Result;
use kurbo::Point;
use serde::Deserialize;

/// One user action
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditEvent {
    Click { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    AddCurve,
    RemoveCurve,
    SelectCurve { index: usize },
    Color { value: String },
    Width { value: String },
}

impl EditEvent {
    /// Apply this event to `session`
    pub fn apply(&self, session: &mut EditorSession) -> Result<()> {
        match self {
            EditEvent::Click { x, y } => {
                session.click(Point::new(*x, *y));
            }
            EditEvent::Move { x, y } => session.pointer_moved(Point::new(*x, *y)),
            EditEvent::AddCurve => {
                session.add_curve();
            }
            EditEvent::RemoveCurve => {
                session.remove_selected_curve()?;
            }
            EditEvent::SelectCurve { index } => session.select_curve(*index)?,
            EditEvent::Color { value } => session.apply_color(value)?,
            EditEvent::Width { value } => session.apply_line_width(value)?,
        }
        Ok(())
    }
}

/// Counts from a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

/// An ordered list of events
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventScript {
    #[serde(default, rename = "event")]
    pub events: Vec<EditEvent>,
}

impl EventScript {
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Apply every event in order.
    ///
    /// A rejected event is logged and skipped; the rest still run, the
    /// same way the interactive editor shows a notice and carries on.
    pub fn replay(&self, session: &mut EditorSession) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        for (n, event) in self.events.iter().enumerate() {
            match event.apply(session) {
                Ok(()) => summary.applied += 1,
                Err(err) => {
                    tracing::warn!("Event {} ({:?}) rejected: {}", n + 1, event, err);
                    summary.rejected += 1;
                }
            }
        }
        tracing::info!(
            "Replayed {} events ({} rejected)",
            self.events.len(),
            summary.rejected
        );
        summary
    }
}
