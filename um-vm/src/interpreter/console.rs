//! Interactive console
//!
//! Reached from a running program when the escape byte arrives on live
//! terminal input. A command typed on the same line as the escape runs once
//! and execution resumes; an empty line opens the `um> ` prompt loop. The
//! console shares the machine's own host streams, so everything it prints
//! lands in the same terminal the program writes to.

use super::Interpreter;
use crate::consts::SNAPSHOT_DEFAULT_PATH;
use crate::screen;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConsoleAction {
    /// Return control to the running program.
    Resume,
    /// Stop the machine; the process exits cleanly.
    Halt,
}

enum CommandOutcome {
    Continue,
    Loaded,
    Leave,
    Halt,
}

impl<R, W> Interpreter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) fn console_enter(&mut self) -> ConsoleAction {
        let Some(line) = self.read_command_line() else {
            return ConsoleAction::Resume;
        };

        // A command typed right behind the escape byte runs once. Only a
        // snapshot load warrants repainting the terminal on this path.
        if !line.is_empty() {
            return match self.run_command(&line) {
                CommandOutcome::Loaded => {
                    self.redraw();
                    ConsoleAction::Resume
                }
                CommandOutcome::Halt => ConsoleAction::Halt,
                CommandOutcome::Continue | CommandOutcome::Leave => ConsoleAction::Resume,
            };
        }

        screen::reset(&mut self.output);
        loop {
            let _ = write!(self.output, "um> ");
            let _ = self.output.flush();
            let Some(line) = self.read_command_line() else {
                return ConsoleAction::Resume;
            };
            if line.is_empty() {
                continue;
            }
            match self.run_command(&line) {
                CommandOutcome::Leave => break,
                CommandOutcome::Halt => return ConsoleAction::Halt,
                CommandOutcome::Continue | CommandOutcome::Loaded => {}
            }
        }
        self.redraw();
        ConsoleAction::Resume
    }

    fn run_command(&mut self, line: &str) -> CommandOutcome {
        debug!(command = line, "console command");
        let (cmd, arg) = match line.split_once(' ') {
            Some((cmd, arg)) => (cmd, Some(arg)),
            None => (line, None),
        };
        match cmd {
            "stat" => {
                self.command_stat();
                CommandOutcome::Continue
            }
            "save" => {
                self.command_save(arg.unwrap_or(SNAPSHOT_DEFAULT_PATH));
                CommandOutcome::Continue
            }
            "load" => {
                if self.command_load(arg.unwrap_or(SNAPSHOT_DEFAULT_PATH)) {
                    CommandOutcome::Loaded
                } else {
                    CommandOutcome::Continue
                }
            }
            "send" => {
                self.command_send(arg);
                CommandOutcome::Continue
            }
            "halt" | "quit" | "q" => CommandOutcome::Halt,
            "exit" | "x" => CommandOutcome::Leave,
            _ => {
                let _ = writeln!(self.output, "unknown command: {cmd}");
                CommandOutcome::Continue
            }
        }
    }

    fn command_stat(&mut self) {
        let arena = self.arena.stats();
        let memory = self.arena.memory_stats();
        let core = self.stats();
        let _ = write!(self.output, "{arena}{memory}{core}");
    }

    fn command_save(&mut self, path: &str) {
        let file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                let _ = writeln!(self.output, "opening file: {err}");
                return;
            }
        };
        let mut wtr = BufWriter::new(file);
        match self.save_snapshot(&mut wtr).and_then(|()| wtr.stream_position()) {
            Ok(bytes) => {
                let _ = writeln!(self.output, "saved to {path}, {bytes} bytes.");
            }
            Err(err) => {
                let _ = writeln!(self.output, "writing snapshot: {err}");
            }
        }
    }

    fn command_load(&mut self, path: &str) -> bool {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                let _ = writeln!(self.output, "opening file: {err}");
                return false;
            }
        };
        let mut rdr = BufReader::new(file);
        match self.load_snapshot(&mut rdr) {
            Ok(()) => {
                let bytes = rdr.stream_position().unwrap_or(0);
                let _ = writeln!(self.output, "loaded from {path}, {bytes} bytes.");
                true
            }
            Err(err) => {
                let _ = writeln!(self.output, "{err}");
                false
            }
        }
    }

    fn command_send(&mut self, arg: Option<&str>) {
        let Some(path) = arg else {
            let _ = writeln!(self.output, "no filename specified!");
            return;
        };
        match fs::read(path) {
            Ok(bytes) => self.io.feed_paste(&bytes),
            Err(err) => {
                let _ = writeln!(self.output, "opening file: {err}");
            }
        }
    }

    fn redraw(&mut self) {
        screen::reset(&mut self.output);
        self.io.print_backlog(&mut self.output);
    }

    fn read_command_line(&mut self) -> Option<String> {
        let mut raw = Vec::new();
        match self.input.read_until(b'\n', &mut raw) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(String::from_utf8_lossy(&raw).trim_end().to_string()),
        }
    }
}
