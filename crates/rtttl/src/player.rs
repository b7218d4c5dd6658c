//! Non-blocking playback stepping
//!
//! Nothing here produces sound. [`Events`] turns a melody into a flat
//! sequence of frequency/length pairs; [`Player`] adds wall-clock
//! scheduling in the polled style of embedded tone libraries, where the
//! caller owns the clock and calls [`Player::poll`] from its main loop.

use std::time::Duration;

use crate::note::Note;
use crate::ringtone::Ringtone;
use crate::tempo::Tempo;

/// One element of a melody rendered for playback: a frequency to sound
/// (or silence) and how long to hold it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneEvent {
    /// Frequency in Hz; `None` means silence (a rest)
    pub frequency: Option<f32>,

    /// How long the tone or silence lasts
    pub length: Duration,
}

/// Iterator over a ringtone's notes as [`ToneEvent`]s.
///
/// Created by [`Ringtone::events`].
pub struct Events<'a> {
    notes: std::slice::Iter<'a, Note>,
    tempo: Tempo,
}

impl<'a> Events<'a> {
    pub(crate) fn new(ringtone: &'a Ringtone) -> Self {
        Self {
            notes: ringtone.notes.iter(),
            tempo: ringtone.defaults.tempo,
        }
    }
}

impl Iterator for Events<'_> {
    type Item = ToneEvent;

    fn next(&mut self) -> Option<ToneEvent> {
        let note = self.notes.next()?;
        Some(ToneEvent {
            frequency: note.frequency(),
            length: note.length(self.tempo),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.notes.size_hint()
    }
}

impl ExactSizeIterator for Events<'_> {}

/// A playback transition reported by [`Player::poll`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// A pitched note starts sounding now
    Tone {
        /// Frequency in Hz
        frequency: f32,
        /// How long to hold the tone
        length: Duration,
    },

    /// A rest starts now; stop any sounding tone
    Rest {
        /// How long the silence lasts
        length: Duration,
    },

    /// The last note has elapsed; reported exactly once per playback
    Finished,
}

enum State {
    Idle,
    Ready,
    Sounding { index: usize, until: u32 },
    Done,
}

/// Polled playback stepper over a borrowed [`Ringtone`].
///
/// The caller supplies monotonic millisecond timestamps (embedded
/// `millis()` style, `u32` with wrap-around). [`Player::poll`] returns
/// `Some` exactly at note transitions and `None` while a note is still
/// sounding, so it is cheap to call every loop iteration.
///
/// Note boundaries are scheduled from the previous boundary, not from
/// the poll timestamp, so late polls do not accumulate drift; a poll
/// arriving several boundaries late advances one note per call.
///
/// # Example
///
/// ```
/// use rtttl::{Player, PlayerEvent, Ringtone};
///
/// let tone = Ringtone::parse("Beep:d=4,b=120:c6,p").unwrap();
/// let mut player = Player::new(&tone);
/// player.start();
///
/// assert!(matches!(player.poll(0), Some(PlayerEvent::Tone { .. })));
/// assert!(player.poll(100).is_none());
/// assert!(matches!(player.poll(500), Some(PlayerEvent::Rest { .. })));
/// assert!(matches!(player.poll(1000), Some(PlayerEvent::Finished)));
/// assert!(player.is_finished());
/// ```
pub struct Player<'a> {
    ringtone: &'a Ringtone,
    state: State,
}

impl<'a> Player<'a> {
    /// Create an idle player; call [`Player::start`] to arm it.
    pub fn new(ringtone: &'a Ringtone) -> Self {
        Self {
            ringtone,
            state: State::Idle,
        }
    }

    /// Arm (or re-arm) playback; the next [`Player::poll`] starts the
    /// first note at its timestamp.
    pub fn start(&mut self) {
        self.state = State::Ready;
    }

    /// Whether playback has run to completion.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Index of the currently sounding note, if any.
    pub fn position(&self) -> Option<usize> {
        match self.state {
            State::Sounding { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Advance the clock to `now` (milliseconds) and report a transition
    /// if one is due.
    pub fn poll(&mut self, now: u32) -> Option<PlayerEvent> {
        match self.state {
            State::Idle | State::Done => None,
            State::Ready => {
                // Parsed ringtones are never empty, but hand-built or
                // deserialized ones can be; finish immediately.
                if self.ringtone.notes.is_empty() {
                    self.state = State::Done;
                    return Some(PlayerEvent::Finished);
                }
                Some(self.begin(0, now))
            }
            State::Sounding { index, until } => {
                if !reached(now, until) {
                    return None;
                }
                let next = index + 1;
                if next < self.ringtone.notes.len() {
                    // Schedule from the old boundary, not `now`.
                    Some(self.begin(next, until))
                } else {
                    self.state = State::Done;
                    Some(PlayerEvent::Finished)
                }
            }
        }
    }

    fn begin(&mut self, index: usize, start: u32) -> PlayerEvent {
        let note = &self.ringtone.notes[index];
        let length = note.length(self.ringtone.defaults.tempo);
        let until = start.wrapping_add(length.as_millis() as u32);
        self.state = State::Sounding { index, until };
        match note.frequency() {
            Some(frequency) => PlayerEvent::Tone { frequency, length },
            None => PlayerEvent::Rest { length },
        }
    }
}

/// Wrapping `now >= deadline` comparison for `millis()`-style clocks.
fn reached(now: u32, deadline: u32) -> bool {
    now.wrapping_sub(deadline) < u32::MAX / 2
}
