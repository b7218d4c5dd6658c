//! Interactive RTTTL prompt

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use rtttl::{Ringtone, RtttlError};

/// Run the read-parse-summarize loop until EOF.
pub fn run() -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("rtttl {} - enter a melody, Ctrl-D to exit", rtttl::VERSION);

    loop {
        match editor.readline("rtttl> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                match Ringtone::parse(line) {
                    Ok(tone) => summarize(&tone),
                    Err(err) => report(line, &err),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn summarize(tone: &Ringtone) {
    let name = if tone.name.is_empty() {
        "(unnamed)"
    } else {
        &tone.name
    };
    println!(
        "{name}: {} notes, {} bpm, {:.2}s",
        tone.notes.len(),
        tone.tempo().bpm(),
        tone.total_length().as_secs_f64()
    );
}

/// Print the error, with a caret under the offending byte when known.
fn report(line: &str, err: &RtttlError) {
    println!("error: {err}");
    if let Some(at) = err.position() {
        let column = line
            .get(..at)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(at);
        println!("  {line}");
        println!("  {}^", " ".repeat(column));
    }
}
