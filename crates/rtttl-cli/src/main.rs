//! Command-line inspector for RTTTL ringtone melodies.

use std::fs;
use std::io::Read as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rtttl::Ringtone;

mod repl;

#[derive(Parser)]
#[command(
    name = "rtttl",
    version,
    about = "Inspect, validate and reformat RTTTL ringtones"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a summary of a ringtone
    Info(InputArgs),

    /// List every note with its frequency and length
    Notes {
        #[command(flatten)]
        input: InputArgs,

        /// Emit the parsed ringtone as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Parse a ringtone and re-emit it in canonical form
    Fmt(InputArgs),

    /// Interactive prompt: paste melodies, get summaries
    Repl,
}

#[derive(Args)]
struct InputArgs {
    /// The RTTTL string ("-" or omitted reads stdin)
    melody: Option<String>,

    /// Read the melody from a file instead
    #[arg(short, long, conflicts_with = "melody")]
    file: Option<PathBuf>,
}

impl InputArgs {
    fn read(&self) -> Result<String> {
        if let Some(path) = &self.file {
            return fs::read_to_string(path).with_context(|| format!("reading {}", path.display()));
        }
        match self.melody.as_deref() {
            Some("-") | None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
            Some(melody) => Ok(melody.to_string()),
        }
    }

    fn ringtone(&self) -> Result<Ringtone> {
        let raw = self.read()?;
        Ok(Ringtone::parse(raw.trim())?)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Info(input) => info(&input.ringtone()?),
        Command::Notes { input, json } => notes(&input.ringtone()?, json),
        Command::Fmt(input) => {
            println!("{}", input.ringtone()?);
            Ok(())
        }
        Command::Repl => repl::run(),
    }
}

fn info(tone: &Ringtone) -> Result<()> {
    let name = if tone.name.is_empty() {
        "(unnamed)"
    } else {
        &tone.name
    };
    println!("name:     {name}");
    println!("tempo:    {} bpm", tone.tempo().bpm());
    println!(
        "defaults: d={}, o={}",
        tone.defaults.duration.divisor(),
        tone.defaults.octave.get()
    );
    println!("notes:    {}", tone.notes.len());
    println!("length:   {:.2}s", tone.total_length().as_secs_f64());
    Ok(())
}

fn notes(tone: &Ringtone, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tone)?);
        return Ok(());
    }
    for (i, (note, event)) in tone.notes.iter().zip(tone.events()).enumerate() {
        let hz = match event.frequency {
            Some(hz) => format!("{hz:8.2} Hz"),
            None => "    rest   ".to_string(),
        };
        println!(
            "{i:3}  {:8}  {hz}  {:5} ms",
            note.to_string(),
            event.length.as_millis()
        );
    }
    Ok(())
}
