//! Click handling: box selection, highlight state and burst spawning

use particles::ParticleSystem;
use scene::constants::BOX_COUNT;
use scene::Scene;

use crate::audio::{AudioFeedback, SnippetCursor, SNIPPET_SECONDS};

/// Clicks left of this (normalised) x select box 1
pub const LEFT_THRESHOLD: f32 = -0.5;
/// Clicks right of this (normalised) x select box 2
pub const RIGHT_THRESHOLD: f32 = 0.5;

/// Box selected by a click at horizontal position `x` in `[-1, 1]`.
pub fn box_for_click(x: f32) -> usize {
    if x < LEFT_THRESHOLD {
        1
    } else if x > RIGHT_THRESHOLD {
        2
    } else {
        0
    }
}

/// Map a surface-local pixel x to `[-1, 1]` across the surface width.
pub fn normalize_click_x(pixel_x: f64, width: u32) -> f32 {
    if width == 0 {
        return 0.0;
    }
    (pixel_x / f64::from(width) * 2.0 - 1.0) as f32
}

/// Which box, if any, is drawn in the highlight colour.
///
/// Holding a single optional index makes two simultaneous highlights
/// unrepresentable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightState {
    selected: Option<usize>,
}

impl HighlightState {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Unknown indices are never highlighted
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn flags(&self) -> [bool; BOX_COUNT] {
        std::array::from_fn(|i| self.is_highlighted(i))
    }

    fn select(&mut self, index: usize) {
        self.selected = (index < BOX_COUNT).then_some(index);
    }
}

/// Owns the highlight state; the only code that changes it.
pub struct InteractionController {
    highlight: HighlightState,
    snippets: SnippetCursor,
    audio: Box<dyn AudioFeedback>,
}

impl InteractionController {
    pub fn new(audio: Box<dyn AudioFeedback>, track_duration: Option<f32>) -> Self {
        Self {
            highlight: HighlightState::default(),
            snippets: SnippetCursor::new(track_duration),
            audio,
        }
    }

    pub fn highlight(&self) -> HighlightState {
        self.highlight
    }

    /// Handle a click at normalised x and return the selected box.
    ///
    /// Selects the box (clearing any previous selection), requests an audio
    /// snippet and spawns a particle burst at the box centre. Must only be
    /// called between frames.
    pub fn on_click(&mut self, x: f32, scene: &Scene, particles: &mut ParticleSystem) -> usize {
        let index = box_for_click(x);
        self.highlight.select(index);

        let start = self.snippets.next_start();
        self.audio.play_snippet(start, SNIPPET_SECONDS);

        particles.spawn_burst(scene.box_position(index));
        tracing::info!(x, index, live_particles = particles.len(), "box selected");
        index
    }
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("highlight", &self.highlight)
            .field("snippets", &self.snippets)
            .finish_non_exhaustive()
    }
}
