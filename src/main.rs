//! Bebop command line: run (or transpile) one track of a MIDI file.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;

use bebop::config::{Config, InputMode};
use bebop::midi;
use bebop::translate::Scale;
use bebop::vm::{
    ByteInput, InputSource, Instruction, Interpreter, JumpTable, LineInput, Machine, Step,
};

#[derive(Debug, Parser)]
#[command(version, about = "Run a MIDI track as a program")]
struct Cli {
    /// Standard MIDI File to run.
    file: PathBuf,
    /// Track index to translate.
    #[arg(short = 'T', long)]
    track: Option<usize>,
    /// Scale the track's intervals are read in (major, minor, dominant).
    #[arg(short = 'S', long)]
    scale: Option<Scale>,
    /// Print the translated instruction text instead of running it.
    #[arg(long)]
    emit: bool,
    /// How `,` reads from stdin.
    #[arg(long, value_parser = parse_input_mode)]
    input_mode: Option<InputMode>,
    /// Stop after this many instructions.
    #[arg(long)]
    max_steps: Option<u64>,
    /// Print the number of tracks in the file and exit.
    #[arg(long)]
    list_tracks: bool,
}

fn parse_input_mode(s: &str) -> Result<InputMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "line" => Ok(InputMode::Line),
        "stream" => Ok(InputMode::Stream),
        other => Err(format!("unknown input mode '{other}' (expected line or stream)")),
    }
}

/// Why a run stopped before the program ended.
enum Stopped {
    StepLimit(u64),
    Interrupted,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("bebop: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load().unwrap_or_default();
    let track = cli.track.unwrap_or(config.track);
    let scale = cli.scale.unwrap_or(config.scale);
    let input_mode = cli.input_mode.unwrap_or(config.input_mode);

    if cli.list_tracks {
        let bytes = std::fs::read(&cli.file)?;
        println!("{}", midi::track_count(&bytes)?);
        return Ok(());
    }

    let events = midi::load_track(&cli.file, track)?;
    let interpreter = Interpreter::new(scale);
    let program = interpreter.transpile(&events)?;
    tracing::info!(track, %scale, instructions = program.len(), "track translated");

    if cli.emit {
        println!("{program}");
        return Ok(());
    }

    let table = JumpTable::build(&program)?;

    let stdin = io::stdin();
    let mut input: Box<dyn InputSource> = match input_mode {
        InputMode::Line => Box::new(LineInput::with_prompt(
            stdin.lock(),
            io::stderr(),
            config.prompt.clone(),
        )),
        InputMode::Stream => Box::new(ByteInput::new(stdin.lock())),
    };
    let mut output = BufWriter::new(io::stdout().lock());

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&interrupted);
        if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
            tracing::warn!("could not install Ctrl-C handler: {e}");
        }
    }

    let mut machine = Machine::new();
    let stopped = loop {
        if interrupted.load(Ordering::SeqCst) {
            break Some(Stopped::Interrupted);
        }
        if let Some(limit) = cli.max_steps {
            if machine.steps() >= limit {
                break Some(Stopped::StepLimit(limit));
            }
        }
        // Output goes through the buffer; flush before blocking on input.
        if program.get(machine.ip()) == Some(Instruction::Input) {
            output.flush()?;
        }
        if machine.step(&program, &table, &mut input, &mut output)? == Step::Halted {
            break None;
        }
    };
    output.flush()?;

    match stopped {
        None => {
            tracing::info!(steps = machine.steps(), "program finished");
            Ok(())
        }
        Some(Stopped::StepLimit(limit)) => {
            Err(format!("stopped after {limit} steps at instruction {}", machine.ip()).into())
        }
        Some(Stopped::Interrupted) => {
            Err(format!("interrupted at instruction {}", machine.ip()).into())
        }
    }
}
