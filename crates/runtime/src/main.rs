#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
//! # Box Burst Runtime
//!
//! Entry point for the `box_burst` binary.
//!
//! By default a window shows the raymarched scene and left clicks select a
//! box. With `--headless` the same frame loop runs for a fixed number of
//! frames, with clicks scripted through `--click FRAME:X`, and frames are
//! shaded on the CPU and written as PNG.

mod app;
mod cli;

use anyhow::Result;
use clap::Parser;

use cli::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");

    if args.headless {
        app::run_headless(&args)
    } else {
        app::run_windowed(&args)
    }
}
