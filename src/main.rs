// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gymtrack-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gymtrack and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gymtrack CLI entrypoint.
//!
//! Reads and writes the state blob in a state directory: `--state-dir`, else
//! `$GYMTRACK_STATE_DIR`, else the platform data directory. Log verbosity follows `GYMTRACK_LOG`.

use std::error::Error;
use std::path::PathBuf;

use gymtrack::format::{text::summary_text, DayExportKind, ExportFormat, ExportScope};
use gymtrack::model::{AppState, DayCategory};
use gymtrack::store::{FileStorage, WriteDurability};
use gymtrack::{SystemClock, Tracker};
use tracing_subscriber::EnvFilter;

const STATE_DIR_ENV: &str = "GYMTRACK_STATE_DIR";
const LOG_ENV: &str = "GYMTRACK_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--state-dir <dir>] [--durable-writes] <command>\n\nCommands:\n  sedes                                   list sedes in display order (* = active)\n  summary                                 print the summary report\n  export full [--text] [--out <dir>]\n  export summary [--text] [--out <dir>]\n  export week <week-start> [--text] [--out <dir>]\n  export day <week-start> <day> <cardio|exercises> [--text] [--out <dir>]\n  import <file>                           merge a backup or partial export\n\n<week-start> is a date such as 2024-02-26. <day> is one of \"Día 1\"..\"Día 4\" or Cardio.\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\nState directory: --state-dir, else ${STATE_DIR_ENV}, else the platform data directory.\nLog filter: ${LOG_ENV} (default warn)."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Sedes,
    Summary,
    Export { scope: ExportScope, format: ExportFormat, out_dir: Option<PathBuf> },
    Import { file: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    state_dir: Option<PathBuf>,
    durable_writes: bool,
    command: Command,
}

fn parse_day_kind(raw: &str) -> Result<DayExportKind, ()> {
    match raw {
        "cardio" => Ok(DayExportKind::Cardio),
        "exercises" | "ejercicios" => Ok(DayExportKind::Exercises),
        _ => Err(()),
    }
}

fn parse_export(mut args: impl Iterator<Item = String>) -> Result<Command, ()> {
    let mut positional = Vec::new();
    let mut format = ExportFormat::Json;
    let mut out_dir = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text" => {
                if format == ExportFormat::Text {
                    return Err(());
                }
                format = ExportFormat::Text;
            }
            "--out" => {
                if out_dir.is_some() {
                    return Err(());
                }
                out_dir = Some(PathBuf::from(args.next().ok_or(())?));
            }
            _ if arg.starts_with("--") => return Err(()),
            _ => positional.push(arg),
        }
    }

    let scope = match positional.as_slice() {
        [scope] if scope == "full" => ExportScope::Full,
        [scope] if scope == "summary" => ExportScope::Summary,
        [scope, week_start] if scope == "week" => {
            ExportScope::Week { week_start: week_start.clone() }
        }
        [scope, week_start, day, kind] if scope == "day" => ExportScope::Day {
            week_start: week_start.clone(),
            day: day.parse::<DayCategory>().map_err(|_| ())?,
            kind: parse_day_kind(kind)?,
        },
        _ => return Err(()),
    };
    Ok(Command::Export { scope, format, out_dir })
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut state_dir = None;
    let mut durable_writes = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--state-dir" => {
                if state_dir.is_some() {
                    return Err(());
                }
                state_dir = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--durable-writes" => {
                if durable_writes {
                    return Err(());
                }
                durable_writes = true;
            }
            "sedes" | "summary" => {
                if args.next().is_some() {
                    return Err(());
                }
                let command = if arg == "sedes" { Command::Sedes } else { Command::Summary };
                return Ok(CliOptions { state_dir, durable_writes, command });
            }
            "export" => {
                let command = parse_export(args)?;
                return Ok(CliOptions { state_dir, durable_writes, command });
            }
            "import" => {
                let file = PathBuf::from(args.next().ok_or(())?);
                if args.next().is_some() {
                    return Err(());
                }
                let command = Command::Import { file };
                return Ok(CliOptions { state_dir, durable_writes, command });
            }
            _ => return Err(()),
        }
    }

    Err(())
}

fn default_state_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(STATE_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::data_dir().map(|dir| dir.join("gymtrack")).unwrap_or_else(|| PathBuf::from(".gymtrack"))
}

fn print_sedes(state: &AppState) {
    for name in state.sede_order() {
        let marker = if state.active_sede() == Some(name.as_str()) { '*' } else { ' ' };
        let logs = state.daily_logs().iter().filter(|log| log.entry().sede == *name).count();
        let cardio =
            state.daily_cardio_sessions().iter().filter(|s| s.entry().sede == *name).count();
        println!("{marker} {name}  ({logs} logs, {cardio} cardio)");
    }
    if let Some(active) = state.active_sede_data() {
        let favorites = active.favorite_exercises.len();
        let links = active.stretching_links.len() + active.posture_links.len();
        println!("\nactive sede: {favorites} favorites, {links} stretching/posture links");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "gymtrack".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let durability = if options.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        };
        let storage = FileStorage::new(options.state_dir.unwrap_or_else(default_state_dir))
            .with_durability(durability);
        let mut tracker = Tracker::open(storage, SystemClock);

        match options.command {
            Command::Sedes => print_sedes(tracker.state()),
            Command::Summary => {
                let state = tracker.state();
                print!(
                    "{}",
                    summary_text(state.summary_cardio_sessions(), state.summary_logs(), tracker.today())
                );
            }
            Command::Export { scope, format, out_dir } => {
                let file = tracker.export(&scope, format)?;
                let path = out_dir.unwrap_or_else(|| PathBuf::from(".")).join(&file.file_name);
                std::fs::write(&path, file.contents)
                    .map_err(|err| format!("could not write {}: {err}", path.display()))?;
                println!("{}", path.display());
            }
            Command::Import { file } => {
                let raw = std::fs::read_to_string(&file)
                    .map_err(|err| format!("could not read {}: {err}", file.display()))?;
                let kind = tracker.import(&raw)?;
                println!("imported {} document from {}", kind.as_str(), file.display());
            }
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
