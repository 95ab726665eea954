// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Bezier Sketch: the core of an interactive cubic bezier curve editor
//!
//! Clicks append anchors or pick control points, pointer moves drag the
//! picked point while keeping joints smooth, and every curve is
//! flattened with De Casteljau's algorithm for display.

use anyhow::{Context, Result};
use std::path::PathBuf;

pub mod config;
pub mod editing;
pub mod error;
pub mod path;
pub mod render;
pub mod settings;

use config::EditorConfig;
use editing::{EditorSession, EventScript};
use render::{RecordingSurface, SvgSurface};

/// Parsed command-line options
#[derive(Debug, Clone, Default, PartialEq)]
struct CliArgs {
    script: PathBuf,
    config: Option<PathBuf>,
    svg: Option<PathBuf>,
    dump: bool,
}

const USAGE: &str = "Usage: bezier-sketch <events.toml> [--config <config.toml>] [--svg <out.svg>] [--dump]";

/// Entry point for the command-line editor
///
/// Replays a recorded event script against a fresh session, then renders
/// the result as SVG (to a file or stdout) or as a list of draw commands.
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bezier_sketch=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read event script {}", args.script.display()))?;
    let script = EventScript::from_toml_str(&text)
        .with_context(|| format!("Failed to parse event script {}", args.script.display()))?;

    let mut session = EditorSession::new(config);
    script.replay(&mut session);
    for line in session.describe_curves() {
        tracing::info!("{line}");
    }

    if args.dump {
        let mut surface = RecordingSurface::new();
        session.redraw(&mut surface);
        for command in surface.commands() {
            println!("{command}");
        }
        return Ok(());
    }

    let svg = render_svg(&session);
    match &args.svg {
        Some(path) => {
            std::fs::write(path, svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{svg}"),
    }
    Ok(())
}

/// Render every curve of `session` into an SVG document
pub fn render_svg(session: &EditorSession) -> String {
    let mut surface = SvgSurface::new(settings::canvas::WIDTH, settings::canvas::HEIGHT);
    session.redraw(&mut surface);
    surface.to_svg()
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut script = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--svg" => {
                let value = args.next().context("--svg needs a path")?;
                parsed.svg = Some(PathBuf::from(value));
            }
            "--dump" => parsed.dump = true,
            flag if flag.starts_with("--") => anyhow::bail!("Unknown option {flag}\n{USAGE}"),
            _ if script.is_none() => script = Some(PathBuf::from(&arg)),
            _ => anyhow::bail!("Unexpected argument {arg}\n{USAGE}"),
        }
    }

    parsed.script = script.context(USAGE)?;
    Ok(parsed)
}
