//! Tempo handling and whole-note timing

use std::time::Duration;

use crate::error::RtttlError;

/// Playback tempo in beats (quarter notes) per minute.
///
/// RTTTL tempos come from the Nokia table, which spans 25 to 900 BPM.
/// The exact table values are not enforced, only the range. The format
/// default is 63 BPM.
///
/// # Example
///
/// ```
/// use rtttl::Tempo;
///
/// let tempo = Tempo::new(120).unwrap();
/// assert_eq!(tempo.bpm(), 120);
/// assert_eq!(tempo.whole_note().as_millis(), 2000);
///
/// assert!(Tempo::new(1000).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u16", into = "u16")
)]
pub struct Tempo(u16);

impl Tempo {
    /// Slowest accepted tempo
    pub const MIN: u16 = 25;

    /// Fastest accepted tempo
    pub const MAX: u16 = 900;

    /// Create a tempo, rejecting values outside 25..=900 BPM.
    pub fn new(bpm: u16) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&bpm).then_some(Self(bpm))
    }

    /// Beats per minute.
    pub fn bpm(&self) -> u16 {
        self.0
    }

    /// Length of a whole note at this tempo.
    ///
    /// A beat is a quarter note, so a whole note lasts `4 * 60_000 / bpm`
    /// milliseconds (integer division, matching embedded implementations).
    pub fn whole_note(&self) -> Duration {
        Duration::from_millis(self.whole_note_ms())
    }

    pub(crate) fn whole_note_ms(&self) -> u64 {
        240_000 / u64::from(self.0)
    }
}

impl Default for Tempo {
    /// The RTTTL default tempo, 63 BPM.
    fn default() -> Self {
        Self(63)
    }
}

impl TryFrom<u16> for Tempo {
    type Error = RtttlError;

    fn try_from(bpm: u16) -> Result<Self, Self::Error> {
        Self::new(bpm).ok_or(RtttlError::InvalidTempo {
            value: u32::from(bpm),
        })
    }
}

impl From<Tempo> for u16 {
    fn from(tempo: Tempo) -> u16 {
        tempo.0
    }
}
