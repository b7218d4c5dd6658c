//! # rtttl
//!
//! A parser and playback stepper for RTTTL (Ring Tone Text Transfer
//! Language), the compact text format encoding monophonic ringtone
//! melodies as comma-separated note tokens with duration, pitch, octave
//! and a global default-settings header.
//!
//! The crate turns an RTTTL string into a typed [`Ringtone`], computes
//! per-note frequency and wall-clock length, re-serializes melodies to
//! canonical form, and drives non-blocking playback stepping through
//! [`Player`]. No audio device is touched; playback is delivered as
//! frequency/length events for the caller to render.
//!
//! ## Example
//!
//! ```
//! use rtttl::Ringtone;
//!
//! let tone = Ringtone::parse("Beep:d=8,o=5,b=120:c,8p,16c6").unwrap();
//! assert_eq!(tone.name, "Beep");
//! assert_eq!(tone.notes.len(), 3);
//! assert_eq!(tone.total_length().as_millis(), 625);
//!
//! let first = tone.events().next().unwrap();
//! assert_eq!(first.length.as_millis(), 250);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod note;
mod parse;
pub mod player;
pub mod ringtone;
pub mod tempo;

// Re-export main types
pub use error::{Result, RtttlError};
pub use note::{Note, NoteDuration, Octave, Pitch};
pub use player::{Events, Player, PlayerEvent, ToneEvent};
pub use ringtone::{Defaults, Ringtone};
pub use tempo::Tempo;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
