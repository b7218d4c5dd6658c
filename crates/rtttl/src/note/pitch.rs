//! Pitch names and equal-tempered frequencies

use super::Octave;

/// Reference frequencies for octave 4, indexed by semitone (C = 0).
///
/// A4 = 440 Hz equal temperament. Higher octaves double per step.
const OCTAVE_4_HZ: [f32; 12] = [
    261.63, // C
    277.18, // C#
    293.66, // D
    311.13, // D#
    329.63, // E
    349.23, // F
    369.99, // F#
    392.00, // G
    415.30, // G#
    440.00, // A
    466.16, // A#
    493.88, // B
];

/// A pitch name within an octave, or a rest.
///
/// RTTTL spells pitches `a` through `g` with an optional `#`, plus `h`
/// (the German spelling of B) and `p` for a pause. Only sharps exist in
/// the format; there are no flats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pitch {
    /// C natural
    C,
    /// C sharp
    CSharp,
    /// D natural
    D,
    /// D sharp
    DSharp,
    /// E natural
    E,
    /// F natural
    F,
    /// F sharp
    FSharp,
    /// G natural
    G,
    /// G sharp
    GSharp,
    /// A natural
    A,
    /// A sharp
    ASharp,
    /// B natural (also spelled `h`)
    B,
    /// A rest (spelled `p` in RTTTL)
    Rest,
}

impl Pitch {
    /// Resolve an RTTTL pitch letter plus optional sharp.
    ///
    /// Case-insensitive. Returns `None` for letters outside `a..=h`/`p`
    /// and for sharps that name no semitone (`e#`, `b#`, `h#`, `p#`).
    ///
    /// # Example
    ///
    /// ```
    /// use rtttl::Pitch;
    ///
    /// assert_eq!(Pitch::from_token('c', true), Some(Pitch::CSharp));
    /// assert_eq!(Pitch::from_token('H', false), Some(Pitch::B));
    /// assert_eq!(Pitch::from_token('e', true), None);
    /// ```
    pub fn from_token(letter: char, sharp: bool) -> Option<Self> {
        match (letter.to_ascii_lowercase(), sharp) {
            ('c', false) => Some(Pitch::C),
            ('c', true) => Some(Pitch::CSharp),
            ('d', false) => Some(Pitch::D),
            ('d', true) => Some(Pitch::DSharp),
            ('e', false) => Some(Pitch::E),
            ('f', false) => Some(Pitch::F),
            ('f', true) => Some(Pitch::FSharp),
            ('g', false) => Some(Pitch::G),
            ('g', true) => Some(Pitch::GSharp),
            ('a', false) => Some(Pitch::A),
            ('a', true) => Some(Pitch::ASharp),
            ('b', false) | ('h', false) => Some(Pitch::B),
            ('p', false) => Some(Pitch::Rest),
            _ => None,
        }
    }

    /// Semitone index within the octave (C = 0, B = 11); `None` for rests.
    pub fn semitone(&self) -> Option<u8> {
        match self {
            Pitch::C => Some(0),
            Pitch::CSharp => Some(1),
            Pitch::D => Some(2),
            Pitch::DSharp => Some(3),
            Pitch::E => Some(4),
            Pitch::F => Some(5),
            Pitch::FSharp => Some(6),
            Pitch::G => Some(7),
            Pitch::GSharp => Some(8),
            Pitch::A => Some(9),
            Pitch::ASharp => Some(10),
            Pitch::B => Some(11),
            Pitch::Rest => None,
        }
    }

    /// Whether this is the rest pseudo-pitch.
    pub fn is_rest(&self) -> bool {
        matches!(self, Pitch::Rest)
    }

    /// Frequency in Hz at the given octave; `None` for rests.
    ///
    /// # Example
    ///
    /// ```
    /// use rtttl::{Octave, Pitch};
    ///
    /// let a4 = Pitch::A.frequency(Octave::new(4).unwrap()).unwrap();
    /// assert_eq!(a4, 440.0);
    /// ```
    pub fn frequency(&self, octave: Octave) -> Option<f32> {
        let semitone = usize::from(self.semitone()?);
        let doubling = 1u32 << (octave.get() - Octave::MIN);
        Some(OCTAVE_4_HZ[semitone] * doubling as f32)
    }

    /// The RTTTL token spelling of this pitch.
    pub fn token(&self) -> &'static str {
        match self {
            Pitch::C => "c",
            Pitch::CSharp => "c#",
            Pitch::D => "d",
            Pitch::DSharp => "d#",
            Pitch::E => "e",
            Pitch::F => "f",
            Pitch::FSharp => "f#",
            Pitch::G => "g",
            Pitch::GSharp => "g#",
            Pitch::A => "a",
            Pitch::ASharp => "a#",
            Pitch::B => "b",
            Pitch::Rest => "p",
        }
    }
}
