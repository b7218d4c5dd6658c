//! The `Ringtone` type: a parsed RTTTL melody

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, RtttlError};
use crate::note::{Note, NoteDuration, Octave};
use crate::player::Events;
use crate::tempo::Tempo;

/// The resolved settings section of a ringtone.
///
/// Any setting absent from the input takes the RTTTL default:
/// `d=4`, `o=6`, `b=63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defaults {
    /// Default note duration (`d=`)
    pub duration: NoteDuration,

    /// Default octave (`o=`)
    pub octave: Octave,

    /// Tempo in BPM (`b=`)
    pub tempo: Tempo,
}

/// A parsed RTTTL ringtone: name, defaults and the note sequence.
///
/// Notes are stored fully resolved, so dropping the defaults loses no
/// melody information; they are kept for compact re-serialization.
///
/// # Example
///
/// ```
/// use rtttl::Ringtone;
///
/// let tone = Ringtone::parse("Beep:d=8,o=5,b=120:c,8p,16c6").unwrap();
/// assert_eq!(tone.name, "Beep");
/// assert_eq!(tone.notes.len(), 3);
/// assert_eq!(tone.total_length().as_millis(), 625);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ringtone {
    /// Melody name from the first section; may be empty
    pub name: String,

    /// Resolved settings section
    pub defaults: Defaults,

    /// The melody, in playing order; never empty
    pub notes: Vec<Note>,
}

impl Ringtone {
    /// Parse an RTTTL string.
    pub fn parse(input: &str) -> Result<Self> {
        crate::parse::parse(input)
    }

    /// The playback tempo.
    pub fn tempo(&self) -> Tempo {
        self.defaults.tempo
    }

    /// Total wall-clock length of the melody.
    pub fn total_length(&self) -> Duration {
        self.notes
            .iter()
            .map(|note| note.length(self.defaults.tempo))
            .sum()
    }

    /// The melody as a sequence of tone events (frequency + length).
    pub fn events(&self) -> Events<'_> {
        Events::new(self)
    }
}

impl FromStr for Ringtone {
    type Err = RtttlError;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}

impl fmt::Display for Ringtone {
    /// Canonical RTTTL form.
    ///
    /// The settings header is always written in full; per-note duration
    /// and octave are written only where they differ from the defaults,
    /// with the dot between pitch and octave.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:d={},o={},b={}:",
            self.name,
            self.defaults.duration.divisor(),
            self.defaults.octave.get(),
            self.defaults.tempo.bpm()
        )?;
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write_note(f, note, &self.defaults)?;
        }
        Ok(())
    }
}

/// Write one note token, omitting values that match the defaults.
fn write_note(f: &mut fmt::Formatter<'_>, note: &Note, defaults: &Defaults) -> fmt::Result {
    if note.duration != defaults.duration {
        write!(f, "{}", note.duration.divisor())?;
    }
    write!(f, "{}", note.pitch)?;
    if note.dotted {
        f.write_str(".")?;
    }
    if !note.is_rest() && note.octave != defaults.octave {
        write!(f, "{}", note.octave.get())?;
    }
    Ok(())
}
