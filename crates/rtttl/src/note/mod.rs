//! Note representation: pitch, octave and duration

mod display;
mod duration;
mod pitch;

pub use duration::NoteDuration;
pub use pitch::Pitch;

use std::time::Duration;

use crate::error::RtttlError;
use crate::tempo::Tempo;

/// A validated RTTTL octave, range 4..=7.
///
/// Octave 4 starts at middle C. The format default is octave 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Octave(u8);

impl Octave {
    /// Lowest RTTTL octave
    pub const MIN: u8 = 4;

    /// Highest RTTTL octave
    pub const MAX: u8 = 7;

    /// Create an octave, rejecting values outside 4..=7.
    pub fn new(octave: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&octave)
            .then_some(Self(octave))
    }

    /// The octave number.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Octave {
    /// The RTTTL default octave, 6.
    fn default() -> Self {
        Self(6)
    }
}

impl TryFrom<u8> for Octave {
    type Error = RtttlError;

    fn try_from(octave: u8) -> Result<Self, Self::Error> {
        Self::new(octave).ok_or(RtttlError::InvalidOctave {
            value: u32::from(octave),
        })
    }
}

impl From<Octave> for u8 {
    fn from(octave: Octave) -> u8 {
        octave.0
    }
}

/// A single fully-resolved note of a melody.
///
/// Defaults from the settings section are applied at parse time, so a
/// stored note always knows its own octave and duration.
///
/// # Example
///
/// ```
/// use rtttl::{Note, NoteDuration, Octave, Pitch, Tempo};
///
/// let note = Note::new(Pitch::A, Octave::new(5).unwrap(), NoteDuration::Eighth);
/// assert_eq!(note.frequency(), Some(880.0));
///
/// let tempo = Tempo::new(120).unwrap();
/// assert_eq!(note.length(tempo).as_millis(), 250);
/// assert_eq!(note.dotted().length(tempo).as_millis(), 375);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    /// Pitch name, or `Pitch::Rest` for a pause
    pub pitch: Pitch,

    /// Octave; meaningless (but present) for rests
    pub octave: Octave,

    /// Duration as a fraction of a whole note
    pub duration: NoteDuration,

    /// Whether the note is dotted (duration x 1.5)
    pub dotted: bool,
}

impl Note {
    /// Create an undotted note.
    pub fn new(pitch: Pitch, octave: Octave, duration: NoteDuration) -> Self {
        Self {
            pitch,
            octave,
            duration,
            dotted: false,
        }
    }

    /// Return the dotted version of this note.
    pub fn dotted(self) -> Self {
        Self {
            dotted: true,
            ..self
        }
    }

    /// Whether this note is a rest.
    pub fn is_rest(&self) -> bool {
        self.pitch.is_rest()
    }

    /// Frequency in Hz; `None` for rests.
    pub fn frequency(&self) -> Option<f32> {
        self.pitch.frequency(self.octave)
    }

    /// Wall-clock length of this note at the given tempo.
    ///
    /// Integer millisecond math throughout: the whole-note length is
    /// divided by the duration divisor, and a dot adds half of that again.
    pub fn length(&self, tempo: Tempo) -> Duration {
        let base = tempo.whole_note_ms() / u64::from(self.duration.divisor());
        let ms = if self.dotted { base + base / 2 } else { base };
        Duration::from_millis(ms)
    }
}
