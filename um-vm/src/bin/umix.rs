//! `umix` — Universal Machine interpreter binary.

use um_vm::prelude::*;
use um_vm::{screen, scroll};

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(name = "umix", about = "Universal Machine interpreter")]
struct Opts {
    /// Scroll (program image) to execute
    #[clap(short = 'f', value_name = "PATH", action = ArgAction::Append)]
    scroll: Vec<PathBuf>,

    /// Snapshot to restore before running
    #[clap(short = 's', value_name = "PATH", action = ArgAction::Append)]
    snapshot: Vec<PathBuf>,
}

impl Opts {
    /// Collapse the repeatable flags down to at most one occurrence each.
    fn into_paths(self) -> Result<(Option<PathBuf>, Option<PathBuf>), String> {
        Ok((
            at_most_one(self.scroll, 'f')?,
            at_most_one(self.snapshot, 's')?,
        ))
    }
}

fn at_most_one(mut paths: Vec<PathBuf>, flag: char) -> Result<Option<PathBuf>, String> {
    if paths.len() > 1 {
        return Err(format!("multiple -{flag} option!"));
    }
    Ok(paths.pop())
}

fn main() -> ExitCode {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    let (scroll_path, snapshot_path) = match opts.into_paths() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("umix: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match boot(scroll_path, snapshot_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("umix: {err}");
            ExitCode::FAILURE
        }
    }
}

fn boot(
    scroll_path: Option<PathBuf>,
    snapshot_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let scroll_path = scroll_path.unwrap_or_else(|| PathBuf::from(SCROLL_DEFAULT_PATH));
    let program = scroll::read_scroll(&scroll_path)?;

    screen::reset(&mut io::stdout());
    let mut vm = Interpreter::with_program(&program, io::stdin().lock(), io::stdout().lock());

    if let Some(snapshot_path) = snapshot_path {
        let file = File::open(&snapshot_path)?;
        vm.load_snapshot(&mut BufReader::new(file))?;
        vm.print_backlog();
    }

    vm.run()?;
    Ok(())
}
