//! `goodstein`: prints hereditary base-b decompositions and Goodstein sequences.
//!
//! **Usage:**
//! ```text
//! goodstein decompose [--base <b>] <n>...
//! goodstein sequence [--base <b>] [--steps <k>] <n>
//! ```
//!
//! Global flags: `--notation plain|latex`, `--header`, `--no-value`,
//! `--format text|json`, `--config <file.toml>`, `-v` (repeatable).
//!
//! Exits non-zero on invalid input.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use goodstein::{GoodsteinSequence, Notation};
use goodstein_clients::{
    decompose_arg, DecompositionRecord, FileConfig, OutputFormat, Overrides, Settings, StepRecord,
};
use tracing::{debug, info, Level};

/// Print hereditary base-b decompositions and Goodstein sequences.
#[derive(Parser)]
#[command(
    name = "goodstein",
    version,
    about = "Print hereditary base-b decompositions and Goodstein sequences"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Notation of the decompositions: plain or latex.
    #[arg(long, global = true)]
    notation: Option<Notation>,

    /// Print a header line first.
    #[arg(long, global = true)]
    header: bool,

    /// Do not evaluate decompositions (values explode quickly).
    #[arg(long, global = true)]
    no_value: bool,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// TOML configuration file; flags take precedence.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the hereditary decomposition of each value.
    Decompose {
        /// Base of the decomposition.
        #[arg(long, short, default_value_t = 2, allow_negative_numbers = true)]
        base: i64,

        /// Values to decompose.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Print the Goodstein sequence starting at a value.
    Sequence {
        /// Starting base.
        #[arg(long, short, default_value_t = 2, allow_negative_numbers = true)]
        base: i64,

        /// Number of steps after the starting value.
        #[arg(long)]
        steps: Option<usize>,

        /// Starting value.
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            FileConfig::load(path)?
        }
        None => FileConfig::default(),
    };
    let overrides = Overrides {
        notation: args.notation,
        header: args.header,
        no_value: args.no_value,
        max_steps: match &args.command {
            Command::Sequence { steps, .. } => *steps,
            Command::Decompose { .. } => None,
        },
        format: args.format,
    };
    let settings = Settings::resolve(&file, &overrides)?;
    debug!(?settings, "resolved settings");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &args.command {
        Command::Decompose { base, values } => decompose_all(&mut out, *base, values, &settings)?,
        Command::Sequence { base, value, .. } => sequence(&mut out, *base, value, &settings)?,
    }

    out.flush()?;
    Ok(())
}

fn decompose_all(out: &mut impl Write, base: i64, values: &[String], settings: &Settings) -> Result<()> {
    // parse everything before printing anything
    let decompositions = values
        .iter()
        .map(|text| decompose_arg(base, text))
        .collect::<Result<Vec<_>>>()?;
    let base = base.unsigned_abs();

    if settings.header && settings.format == OutputFormat::Text {
        writeln!(out, "{}", DecompositionRecord::header(base))?;
    }
    for d in &decompositions {
        debug!(base, terms = d.terms().len(), height = d.height(), "decomposed");
        let record = DecompositionRecord::new(base, d, settings);
        writeln!(out, "{}", record.to_line(settings.format)?)?;
    }
    info!(count = decompositions.len(), base, "decompositions written");
    Ok(())
}

fn sequence(out: &mut impl Write, base: i64, value: &str, settings: &Settings) -> Result<()> {
    let start = decompose_arg(base, value)?;
    let steps = GoodsteinSequence::from_decomposition(base.unsigned_abs(), start);

    if settings.header && settings.format == OutputFormat::Text {
        writeln!(out, "{}", StepRecord::header(settings))?;
    }
    let mut last = None;
    for step in steps.take(settings.max_steps.saturating_add(1)) {
        debug!(
            index = step.index,
            base = step.base,
            terms = step.decomposition.terms().len(),
            "step"
        );
        let record = StepRecord::new(&step, settings);
        writeln!(out, "{}", record.to_line(settings.format)?)?;
        last = Some(step);
    }

    match last {
        Some(step) if step.decomposition.is_zero() => {
            info!(steps = step.index, base = step.base, "sequence reached zero");
        }
        Some(step) => info!(steps = step.index, base = step.base, "step limit reached"),
        None => {}
    }
    Ok(())
}
