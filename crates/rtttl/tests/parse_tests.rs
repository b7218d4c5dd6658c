//! Parsing tests against real-world RTTTL strings

use pretty_assertions::assert_eq;
use rtttl::*;

const HAUNT_HOUSE: &str = "HauntHouse: d=4,o=5,b=108: 2a4, 2e, 2d#, 2b4, 2a4, 2c, 2a4, 2d#, 2a4, 2f#4, 2b4, 2a4, 2c, 2e, 2d#, 2b4, 2a4, 2c, 2d#, 2a4, 2f#4, 2b4";

const STAR_WARS: &str = "StarWars:d=4,o=5,b=45:32p,32f#,32f#,32f#,8b.,8f#.6,32e6,32d#6,32c#6,8b.6,16f#.6,32e6,32d#6,32c#6,8b.6,16f#.6,32e6,32d#6,32e6,8c#.6";

#[test]
fn test_haunt_house_header() {
    let tone = Ringtone::parse(HAUNT_HOUSE).unwrap();
    assert_eq!(tone.name, "HauntHouse");
    assert_eq!(tone.defaults.tempo.bpm(), 108);
    assert_eq!(tone.defaults.octave.get(), 5);
    assert_eq!(tone.defaults.duration, NoteDuration::Quarter);
    assert_eq!(tone.notes.len(), 22);
}

#[test]
fn test_haunt_house_notes_and_length() {
    let tone = Ringtone::parse(HAUNT_HOUSE).unwrap();

    let first = tone.notes[0];
    assert_eq!(first.pitch, Pitch::A);
    assert_eq!(first.octave.get(), 4);
    assert_eq!(first.duration, NoteDuration::Half);
    assert!(!first.dotted);
    assert_eq!(first.frequency(), Some(440.0));

    // 108 bpm: whole note 2222 ms, half note 1111 ms, 22 half notes
    assert_eq!(tone.total_length().as_millis(), 22 * 1111);
}

#[test]
fn test_star_wars_dotted_notes() {
    let tone = Ringtone::parse(STAR_WARS).unwrap();
    assert_eq!(tone.name, "StarWars");
    assert_eq!(tone.notes.len(), 20);

    // Opening rest
    assert!(tone.notes[0].is_rest());
    assert_eq!(tone.notes[0].duration, NoteDuration::ThirtySecond);

    // "8b." - dotted eighth at the default octave
    let fifth = tone.notes[4];
    assert_eq!(fifth.pitch, Pitch::B);
    assert_eq!(fifth.octave.get(), 5);
    assert!(fifth.dotted);

    // "8f#.6" - dot written before the octave digit
    let sixth = tone.notes[5];
    assert_eq!(sixth.pitch, Pitch::FSharp);
    assert_eq!(sixth.octave.get(), 6);
    assert!(sixth.dotted);
}

#[test]
fn test_default_resolution() {
    let tone = Ringtone::parse("scale:d=8,o=5:a").unwrap();
    let note = tone.notes[0];
    assert_eq!(note.duration, NoteDuration::Eighth);
    assert_eq!(note.octave.get(), 5);
    assert_eq!(note.frequency(), Some(880.0));
}

#[test]
fn test_missing_settings_fall_back() {
    let tone = Ringtone::parse("t::1c").unwrap();
    assert_eq!(tone.defaults.tempo.bpm(), 63);
    assert_eq!(tone.notes[0].octave.get(), 6);
    // 63 bpm: whole note is 240_000 / 63 = 3809 ms
    assert_eq!(tone.total_length().as_millis(), 3809);
}

#[test]
fn test_case_insensitive() {
    let upper = Ringtone::parse("T:D=8,O=5,B=100:C#6,P").unwrap();
    let lower = Ringtone::parse("T:d=8,o=5,b=100:c#6,p").unwrap();
    assert_eq!(upper.defaults, lower.defaults);
    assert_eq!(upper.notes, lower.notes);
    assert_eq!(upper.notes[0].pitch, Pitch::CSharp);
    assert!(upper.notes[1].is_rest());
}

#[test]
fn test_whitespace_tolerance() {
    let spaced = Ringtone::parse(" Tune : d = 8 , b = 100 : 16c# , p , 8a4 ").unwrap();
    let tight = Ringtone::parse("Tune:d=8,b=100:16c#,p,8a4").unwrap();
    assert_eq!(spaced, tight);
    assert_eq!(spaced.name, "Tune");
}

#[test]
fn test_german_b_spelling() {
    let tone = Ringtone::parse("t::h,b").unwrap();
    assert_eq!(tone.notes[0].pitch, Pitch::B);
    assert_eq!(tone.notes[0], tone.notes[1]);
}

#[test]
fn test_empty_name_allowed() {
    let tone = Ringtone::parse("::c").unwrap();
    assert_eq!(tone.name, "");
    assert_eq!(tone.notes.len(), 1);
}

#[test]
fn test_rest_ignores_octave_for_frequency() {
    let tone = Ringtone::parse("t::p4,2p").unwrap();
    assert!(tone.notes.iter().all(|n| n.frequency().is_none()));
}

#[test]
fn test_from_str_impl() {
    let tone: Ringtone = "s::c".parse().unwrap();
    assert_eq!(tone.notes[0].pitch, Pitch::C);
}
