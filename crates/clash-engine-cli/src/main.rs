//! `clashck` — check a proposed class slot against existing schedules.
//!
//! A thin front end over [`clash_engine`] for scripting and manual checks.
//! It plays the role the surrounding application's form layer normally
//! plays: load the snapshot of existing schedules for the school year,
//! build the candidate, call the engine, and report what came back. The
//! engine itself does no I/O.
//!
//! Exit codes: 0 when the candidate is conflict-free, 1 when conflicts were
//! found, 2 on usage or input errors.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clash_engine::{detect_conflicts, format_days, ResourceId, Schedule};

#[derive(Parser)]
#[command(
    name = "clashck",
    version,
    about = "Detect room, teacher, and section conflicts for a proposed class slot"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a candidate schedule against an existing snapshot
    Check {
        /// JSON file holding the array of existing schedules
        #[arg(long, value_name = "FILE")]
        existing: PathBuf,

        /// JSON file holding the candidate schedule (reads stdin when omitted)
        #[arg(long, value_name = "FILE")]
        candidate: Option<PathBuf>,

        /// Schedule id to exclude, for re-checking an in-place edit
        #[arg(long, value_name = "ID")]
        exclude_id: Option<String>,

        /// Emit the conflict list as JSON instead of message lines
        #[arg(long)]
        json: bool,
    },

    /// Render a weekday set the way conflict messages do (0 = Sunday)
    FmtDays {
        /// Weekday numbers, 0-6
        days: Vec<u8>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check {
            existing,
            candidate,
            exclude_id,
            json,
        } => check(&existing, candidate.as_deref(), exclude_id.as_deref(), json),
        Command::FmtDays { days } => {
            println!("{}", format_days(&days));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check(
    existing_path: &std::path::Path,
    candidate_path: Option<&std::path::Path>,
    exclude_id: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let existing: Vec<Schedule> = fs::read_to_string(existing_path)
        .map_err(anyhow::Error::from)
        .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from))
        .with_context(|| format!("reading existing schedules from {}", existing_path.display()))?;

    let candidate: Schedule = match candidate_path {
        Some(path) => fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from))
            .with_context(|| format!("reading candidate schedule from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading candidate schedule from stdin")?;
            serde_json::from_str(&buf).context("parsing candidate schedule from stdin")?
        }
    };

    let exclude = exclude_id.map(ResourceId::from);
    let conflicts = detect_conflicts(&candidate, &existing, exclude.as_ref());

    if json {
        println!("{}", serde_json::to_string_pretty(&conflicts)?);
    } else if conflicts.is_empty() {
        println!("No conflicts.");
    } else {
        for conflict in &conflicts {
            println!("{}", conflict.message);
        }
    }

    if conflicts.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
