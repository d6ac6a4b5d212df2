//! Command line configuration.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Raymarched boxes that burst into particles when clicked")]
pub struct Args {
    /// Render without a window, writing PNG frames instead
    #[arg(long)]
    pub headless: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value_t = 120)]
    pub frames: u64,

    /// Frame width in pixels
    #[arg(long, short = 'W', default_value_t = 960)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, short = 'H', default_value_t = 540)]
    pub height: u32,

    /// Scripted click applied before frame FRAME at normalised x (headless, repeatable)
    #[arg(long = "click", value_name = "FRAME:X")]
    pub clicks: Vec<ClickSpec>,

    /// Directory for `frame_XXXX.png` output (headless)
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Save every K-th frame; only the last frame is saved when omitted
    #[arg(long, value_name = "K", value_parser = clap::value_parser!(u64).range(1..))]
    pub save_every: Option<u64>,

    /// Seed for the particle velocity generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Length of the audio track in seconds; snippet offsets wrap past it
    #[arg(long, value_name = "SECS")]
    pub track_duration: Option<f32>,
}

impl Args {
    /// Whether headless frame `frame` (zero-based) should be written to disk.
    #[must_use]
    pub fn should_save(&self, frame: u64) -> bool {
        if self.output.is_none() {
            return false;
        }
        match self.save_every {
            Some(k) => (frame + 1) % k == 0,
            None => frame + 1 == self.frames,
        }
    }
}

/// A click scripted for a headless run
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClickSpec {
    pub frame: u64,
    pub x: f32,
}

#[derive(Error, Debug, PartialEq)]
pub enum ClickParseError {
    #[error("expected FRAME:X, got `{0}`")]
    MissingSeparator(String),
    #[error("invalid frame number `{0}`")]
    Frame(String),
    #[error("invalid x coordinate `{0}`")]
    X(String),
    #[error("x coordinate {0} is outside [-1, 1]")]
    OutOfRange(f32),
}

impl FromStr for ClickSpec {
    type Err = ClickParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (frame, x) = s
            .split_once(':')
            .ok_or_else(|| ClickParseError::MissingSeparator(s.to_string()))?;
        let frame = frame
            .trim()
            .parse()
            .map_err(|_| ClickParseError::Frame(frame.to_string()))?;
        let x: f32 = x
            .trim()
            .parse()
            .map_err(|_| ClickParseError::X(x.to_string()))?;
        if !(-1.0..=1.0).contains(&x) {
            return Err(ClickParseError::OutOfRange(x));
        }
        Ok(Self { frame, x })
    }
}
