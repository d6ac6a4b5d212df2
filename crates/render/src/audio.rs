//! Audio feedback for clicks
//!
//! Playback itself belongs to an external collaborator behind
//! [`AudioFeedback`]. This module only decides which slice of the track to
//! request: every click asks for the next [`SNIPPET_SECONDS`] of the track,
//! wrapping back to the start once the end is reached.

/// Length of every requested snippet, in seconds
pub const SNIPPET_SECONDS: f32 = 0.5;

/// Plays a slice of the feedback track.
///
/// Implementations must return immediately; stopping the snippet after
/// `duration` seconds is their own business and is never awaited by the
/// render loop.
pub trait AudioFeedback {
    fn play_snippet(&mut self, start_offset: f32, duration: f32);
}

/// Tracks where the next snippet starts
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnippetCursor {
    offset: f32,
    track_duration: Option<f32>,
}

impl SnippetCursor {
    /// `track_duration` of `None` means the length is unknown and the cursor never wraps.
    pub fn new(track_duration: Option<f32>) -> Self {
        Self {
            offset: 0.0,
            track_duration,
        }
    }

    /// Start offset for this click; the cursor then moves on by one snippet.
    pub fn next_start(&mut self) -> f32 {
        if let Some(duration) = self.track_duration {
            if self.offset >= duration {
                self.offset = 0.0;
            }
        }
        let start = self.offset;
        self.offset += SNIPPET_SECONDS;
        start
    }
}

/// Collaborator that only records requests in the log
#[derive(Debug, Default)]
pub struct LoggedAudio;

impl AudioFeedback for LoggedAudio {
    fn play_snippet(&mut self, start_offset: f32, duration: f32) {
        tracing::info!(start_offset, duration, "audio snippet requested");
    }
}

#[derive(Debug, Default)]
pub struct NoAudio;

impl AudioFeedback for NoAudio {
    fn play_snippet(&mut self, _start_offset: f32, _duration: f32) {}
}
