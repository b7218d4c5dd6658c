//! RTTTL string parsing
//!
//! An RTTTL string is three colon-separated sections:
//!
//! ```text
//! name : settings : notes
//! ```
//!
//! The settings section is comma-separated `d=`/`o=`/`b=` pairs, any
//! subset, any order. Each note token is `[duration] pitch [#] [.]
//! [octave] [.]` with the dot accepted on either side of the octave
//! digit, both placements occurring in real-world tones. Parsing is
//! case-insensitive and tolerates whitespace around every separator.

mod cursor;

use crate::error::{Result, RtttlError};
use crate::note::{Note, NoteDuration, Octave, Pitch};
use crate::ringtone::{Defaults, Ringtone};
use crate::tempo::Tempo;

use cursor::Cursor;

/// Parse a complete RTTTL string.
pub(crate) fn parse(input: &str) -> Result<Ringtone> {
    let mut cur = Cursor::new(input);

    let name = cur
        .until(':')
        .ok_or(RtttlError::MissingSections)?
        .trim()
        .to_string();
    let defaults = parse_settings(&mut cur)?;
    let notes = parse_melody(&mut cur, &defaults)?;

    Ok(Ringtone {
        name,
        defaults,
        notes,
    })
}

/// Parse the settings section, up to and including the closing `:`.
fn parse_settings(cur: &mut Cursor) -> Result<Defaults> {
    let mut defaults = Defaults::default();

    loop {
        cur.skip_whitespace();
        match cur.peek() {
            Some(':') => {
                cur.bump();
                return Ok(defaults);
            }
            None => return Err(RtttlError::MissingSections),
            Some(_) => {}
        }

        let at = cur.pos();
        let key = match cur.bump() {
            Some(c) => c,
            None => return Err(RtttlError::MissingSections),
        };

        cur.skip_whitespace();
        if !cur.eat('=') {
            return Err(unexpected(cur));
        }
        cur.skip_whitespace();
        let value = match cur.number() {
            Some(value) => value,
            None => return Err(unexpected(cur)),
        };

        match key.to_ascii_lowercase() {
            'd' => {
                defaults.duration = NoteDuration::from_divisor(value)
                    .ok_or(RtttlError::InvalidDuration { value })?;
            }
            'o' => defaults.octave = octave_from(value)?,
            'b' => defaults.tempo = tempo_from(value)?,
            _ => return Err(RtttlError::UnknownSetting { found: key, at }),
        }

        cur.skip_whitespace();
        match cur.peek() {
            Some(',') => {
                cur.bump();
            }
            Some(':') => {}
            Some(found) => {
                return Err(RtttlError::UnexpectedChar {
                    found,
                    at: cur.pos(),
                })
            }
            None => return Err(RtttlError::MissingSections),
        }
    }
}

/// Parse the notes section through to the end of input.
fn parse_melody(cur: &mut Cursor, defaults: &Defaults) -> Result<Vec<Note>> {
    let mut notes = Vec::new();

    loop {
        cur.skip_whitespace();
        if cur.at_end() {
            // Either nothing at all, or a dangling trailing comma.
            return if notes.is_empty() {
                Err(RtttlError::EmptyMelody)
            } else {
                Err(RtttlError::UnexpectedEnd { at: cur.pos() })
            };
        }

        notes.push(parse_note(cur, defaults)?);

        cur.skip_whitespace();
        match cur.peek() {
            Some(',') => {
                cur.bump();
            }
            None => return Ok(notes),
            Some(found) => {
                return Err(RtttlError::UnexpectedChar {
                    found,
                    at: cur.pos(),
                })
            }
        }
    }
}

/// Parse one note token, resolving absent fields from `defaults`.
fn parse_note(cur: &mut Cursor, defaults: &Defaults) -> Result<Note> {
    let duration = match cur.number() {
        Some(value) => {
            NoteDuration::from_divisor(value).ok_or(RtttlError::InvalidDuration { value })?
        }
        None => defaults.duration,
    };

    let at = cur.pos();
    let letter = cur.bump().ok_or(RtttlError::UnexpectedEnd { at })?;
    if !letter.is_ascii_alphabetic() {
        return Err(RtttlError::UnexpectedChar { found: letter, at });
    }
    let sharp = cur.eat('#');
    let pitch = Pitch::from_token(letter, sharp).ok_or_else(|| {
        let mut found = letter.to_string();
        if sharp {
            found.push('#');
        }
        RtttlError::UnknownPitch { found, at }
    })?;

    // Dot before or after the octave digit; at most one.
    let mut dotted = cur.eat('.');
    let octave = match cur.peek().and_then(|c| c.to_digit(10)) {
        Some(value) => {
            cur.bump();
            let octave = octave_from(value)?;
            // An octave digit on a rest is validated but carries no
            // information; normalize so equal melodies compare equal.
            if pitch.is_rest() {
                defaults.octave
            } else {
                octave
            }
        }
        None => defaults.octave,
    };
    if !dotted {
        dotted = cur.eat('.');
    }

    Ok(Note {
        pitch,
        octave,
        duration,
        dotted,
    })
}

fn octave_from(value: u32) -> Result<Octave> {
    u8::try_from(value)
        .ok()
        .and_then(Octave::new)
        .ok_or(RtttlError::InvalidOctave { value })
}

fn tempo_from(value: u32) -> Result<Tempo> {
    u16::try_from(value)
        .ok()
        .and_then(Tempo::new)
        .ok_or(RtttlError::InvalidTempo { value })
}

fn unexpected(cur: &Cursor) -> RtttlError {
    match cur.peek() {
        Some(found) => RtttlError::UnexpectedChar {
            found,
            at: cur.pos(),
        },
        None => RtttlError::UnexpectedEnd { at: cur.pos() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(input: &str) -> Note {
        let tone = parse(&format!("t::{input}")).unwrap();
        tone.notes[0]
    }

    #[test]
    fn test_bare_pitch_uses_defaults() {
        let n = note("a");
        assert_eq!(n.pitch, Pitch::A);
        assert_eq!(n.octave, Octave::default());
        assert_eq!(n.duration, NoteDuration::Quarter);
        assert!(!n.dotted);
    }

    #[test]
    fn test_fully_explicit_token() {
        let n = note("16g#.4");
        assert_eq!(n.pitch, Pitch::GSharp);
        assert_eq!(n.octave.get(), 4);
        assert_eq!(n.duration, NoteDuration::Sixteenth);
        assert!(n.dotted);
    }

    #[test]
    fn test_dot_after_octave() {
        assert_eq!(note("16g#4."), note("16g#.4"));
    }

    #[test]
    fn test_rest_octave_digit_is_normalized() {
        assert_eq!(note("p4"), note("p"));
        assert_eq!(note("2p5").octave, Octave::default());
        // Still validated even though it is discarded
        assert_eq!(
            parse("t::p9").unwrap_err(),
            RtttlError::InvalidOctave { value: 9 }
        );
    }

    #[test]
    fn test_settings_any_order_and_subset() {
        let tone = parse("t:b=100,d=8:c").unwrap();
        assert_eq!(tone.defaults.tempo.bpm(), 100);
        assert_eq!(tone.defaults.duration, NoteDuration::Eighth);
        assert_eq!(tone.defaults.octave, Octave::default());
    }

    #[test]
    fn test_empty_settings_section() {
        let tone = parse("t::c").unwrap();
        assert_eq!(tone.defaults, Defaults::default());
    }
}
