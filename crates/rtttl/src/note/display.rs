//! Display implementations for note types

use std::fmt;

use super::{Note, Pitch};

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for Note {
    /// The fully-explicit RTTTL token: duration, pitch, dot, octave.
    ///
    /// Rests never print an octave. For the compact form that omits
    /// values matching a ringtone's defaults, see `Ringtone`'s `Display`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.duration.divisor(), self.pitch)?;
        if self.dotted {
            f.write_str(".")?;
        }
        if !self.is_rest() {
            write!(f, "{}", self.octave.get())?;
        }
        Ok(())
    }
}
