//! Error types for RTTTL parsing

use thiserror::Error;

/// Main error type for RTTTL operations.
///
/// Syntax errors carry the byte offset into the input where the problem
/// was detected; value-range errors carry the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtttlError {
    /// The input does not have the three `name:settings:notes` sections
    #[error("missing section separator (expected `name:settings:notes`)")]
    MissingSections,

    /// A settings key other than `d`, `o` or `b`
    #[error("unknown setting `{found}` at byte {at} (expected d, o or b)")]
    UnknownSetting {
        /// The key that was found
        found: char,
        /// Byte offset of the key
        at: usize,
    },

    /// A note duration outside {1, 2, 4, 8, 16, 32}
    #[error("invalid duration {value} (expected 1, 2, 4, 8, 16 or 32)")]
    InvalidDuration {
        /// The rejected divisor
        value: u32,
    },

    /// An octave outside 4..=7
    #[error("invalid octave {value} (expected 4-7)")]
    InvalidOctave {
        /// The rejected octave
        value: u32,
    },

    /// A tempo outside 25..=900 BPM
    #[error("invalid tempo {value} (expected 25-900 bpm)")]
    InvalidTempo {
        /// The rejected BPM value
        value: u32,
    },

    /// A pitch token that names no semitone, such as `x` or `e#`
    #[error("unknown pitch `{found}` at byte {at}")]
    UnknownPitch {
        /// The pitch token that was found
        found: String,
        /// Byte offset of the token
        at: usize,
    },

    /// A character that fits no production at this point
    #[error("unexpected character `{found}` at byte {at}")]
    UnexpectedChar {
        /// The character that was found
        found: char,
        /// Byte offset of the character
        at: usize,
    },

    /// Input ended mid-token
    #[error("unexpected end of input at byte {at}")]
    UnexpectedEnd {
        /// Byte offset of the end of input
        at: usize,
    },

    /// The notes section contains no notes
    #[error("melody contains no notes")]
    EmptyMelody,
}

impl RtttlError {
    /// Byte offset where the error was detected, when the variant has one.
    ///
    /// Useful for caret diagnostics against the original input.
    pub fn position(&self) -> Option<usize> {
        match self {
            RtttlError::UnknownSetting { at, .. }
            | RtttlError::UnknownPitch { at, .. }
            | RtttlError::UnexpectedChar { at, .. }
            | RtttlError::UnexpectedEnd { at } => Some(*at),
            _ => None,
        }
    }
}

/// Result type alias for RTTTL operations
pub type Result<T> = std::result::Result<T, RtttlError>;
