//! Note duration (fraction of a whole note)

/// Musical note duration, named by its divisor of a whole note.
///
/// RTTTL writes durations as the divisor: `4` is a quarter note, `16` a
/// sixteenth. Only powers of two up to 32 exist in the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteDuration {
    /// Whole note (divisor 1)
    Whole,
    /// Half note (divisor 2)
    Half,
    /// Quarter note (divisor 4) - the format default
    Quarter,
    /// Eighth note (divisor 8)
    Eighth,
    /// Sixteenth note (divisor 16)
    Sixteenth,
    /// Thirty-second note (divisor 32)
    ThirtySecond,
}

impl NoteDuration {
    /// Resolve an RTTTL duration number.
    ///
    /// # Example
    ///
    /// ```
    /// use rtttl::NoteDuration;
    ///
    /// assert_eq!(NoteDuration::from_divisor(8), Some(NoteDuration::Eighth));
    /// assert_eq!(NoteDuration::from_divisor(3), None);
    /// ```
    pub fn from_divisor(divisor: u32) -> Option<Self> {
        match divisor {
            1 => Some(NoteDuration::Whole),
            2 => Some(NoteDuration::Half),
            4 => Some(NoteDuration::Quarter),
            8 => Some(NoteDuration::Eighth),
            16 => Some(NoteDuration::Sixteenth),
            32 => Some(NoteDuration::ThirtySecond),
            _ => None,
        }
    }

    /// The divisor of a whole note this duration represents.
    pub fn divisor(&self) -> u32 {
        match self {
            NoteDuration::Whole => 1,
            NoteDuration::Half => 2,
            NoteDuration::Quarter => 4,
            NoteDuration::Eighth => 8,
            NoteDuration::Sixteenth => 16,
            NoteDuration::ThirtySecond => 32,
        }
    }
}

impl Default for NoteDuration {
    /// The RTTTL default duration, a quarter note.
    fn default() -> Self {
        NoteDuration::Quarter
    }
}
