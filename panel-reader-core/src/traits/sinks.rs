//! Speech and audio cue sink Traits

use crate::types::AudioCue;

/// Speech Sink Trait
///
/// Fire-and-forget. Whether a new utterance interrupts or queues behind the
/// previous one is the implementation's policy.
///
/// Platform implementation:
/// - TUI: `SpeechLog` (on-screen utterance log)
pub trait SpeechSink: Send + Sync {
    /// Speak an utterance
    ///
    /// # Arguments
    /// * `text` - Utterance text
    fn say(&self, text: &str);
}

/// Audio Cue Sink Trait
///
/// Fire-and-forget short sound effects keyed by semantic event.
pub trait AudioCueSink: Send + Sync {
    /// Play a cue
    ///
    /// # Arguments
    /// * `cue` - Semantic cue
    fn play(&self, cue: AudioCue);
}

/// Sink that drops everything
///
/// Useful for hosts without audio output and for headless tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SpeechSink for NullSink {
    fn say(&self, _text: &str) {}
}

impl AudioCueSink for NullSink {
    fn play(&self, _cue: AudioCue) {}
}
