// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for editor actions and configuration loading.
//!
//! Point editing itself cannot fail. Errors only come from the
//! curve-list actions and from text the user types into the property
//! inputs, and they are reported back to the user rather than treated as
//! fatal.

use thiserror::Error;

/// Errors reported by `EditorSession` actions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// A remove (or property) action was requested with no curve selected.
    #[error("No curve selected!")]
    NoCurveSelected,

    /// The requested curve does not exist.
    #[error("Curve index out of range: {index} (curves: {count})")]
    CurveIndexOutOfRange { index: usize, count: usize },

    /// The stroke width text is not a positive integer.
    #[error("Invalid line width: {0:?}")]
    InvalidLineWidth(String),
}

/// Errors that can occur while loading an `EditorConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for `EditorConfig`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed fine but is out of range.
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type alias for editor actions.
pub type Result<T> = std::result::Result<T, EditorError>;
