// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A drawing surface that just remembers what it was asked to draw

use super::{DrawingSurface, StrokeStyle};
use kurbo::{Circle, Point, Rect};
use std::fmt;

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke(StrokeStyle),
    FillRect { rect: Rect, color: String },
    Dot { circle: Circle, style: StrokeStyle },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Clear => write!(f, "clear"),
            DrawCommand::BeginPath => write!(f, "begin_path"),
            DrawCommand::MoveTo(p) => write!(f, "move_to {} {}", p.x, p.y),
            DrawCommand::LineTo(p) => write!(f, "line_to {} {}", p.x, p.y),
            DrawCommand::Stroke(style) => {
                write!(f, "stroke {} {} {:?}", style.color, style.width, style.dash)
            }
            DrawCommand::FillRect { rect, color } => write!(
                f,
                "fill_rect {} {} {} {} {}",
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
                color
            ),
            DrawCommand::Dot { circle, style } => write!(
                f,
                "dot {} {} r={} {}",
                circle.center.x, circle.center.y, circle.radius, style.color
            ),
        }
    }
}

/// Surface that records every call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded since the last `clear`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `stroke` calls recorded
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke(_)))
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    // A clear wipes the canvas, so earlier commands are irrelevant
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Stroke(style.clone()));
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    fn dot(&mut self, circle: Circle, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Dot {
            circle,
            style: style.clone(),
        });
    }
}
