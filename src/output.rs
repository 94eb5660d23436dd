//! Output sinks: stdout or a pager process

use std::io::{self, BufWriter, Stdout, Write};
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::error::{HighlightError, Result};

/// Environment variable overriding the pager command
pub const PAGER_ENV: &str = "HILICAT_PAGER";

/// Pager used when HILICAT_PAGER is unset; -R passes color codes through
pub const DEFAULT_PAGER: &str = "less -R";

/// Where highlighted text is written
pub enum Output {
    Stdout(BufWriter<Stdout>),
    Pager {
        child: Child,
        stdin: BufWriter<ChildStdin>,
    },
}

impl Output {
    pub fn stdout() -> Self {
        Output::Stdout(BufWriter::new(io::stdout()))
    }

    /// Spawn the pager with its stdout on our terminal
    pub fn pager() -> Result<Self> {
        let command = std::env::var(PAGER_ENV)
            .ok()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PAGER.to_string());
        Self::spawn_pager(&command)
    }

    fn spawn_pager(command: &str) -> Result<Self> {
        let (program, args) = split_command(command);
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| HighlightError::Pager {
                program: program.to_string(),
                source,
            })?;

        let stdin = child.stdin.take().ok_or_else(|| HighlightError::Pager {
            program: program.to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "no stdin pipe"),
        })?;

        log::debug!("started pager: {}", command);
        Ok(Output::Pager {
            child,
            stdin: BufWriter::new(stdin),
        })
    }

    /// Stdout, or the pager if `use_pager` and it can be started
    pub fn select(use_pager: bool) -> Self {
        if !use_pager {
            return Self::stdout();
        }
        match Self::pager() {
            Ok(pager) => pager,
            Err(e) => {
                log::warn!("{}, writing to stdout", e);
                eprintln!("Warning: {e}");
                Self::stdout()
            }
        }
    }

    /// Flush output and, for a pager, close its input and wait for it
    pub fn finish(self) -> Result<()> {
        match self {
            Output::Stdout(mut out) => ignore_broken_pipe(out.flush()),
            Output::Pager { mut child, stdin } => {
                // Closing stdin signals EOF to the pager
                let flushed = stdin.into_inner().map_err(|e| e.into_error()).map(drop);
                ignore_broken_pipe(flushed)?;
                child.wait()?;
                Ok(())
            }
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(out) => out.write(buf),
            Output::Pager { stdin, .. } => stdin.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.flush(),
            Output::Pager { stdin, .. } => stdin.flush(),
        }
    }
}

/// A reader that went away (pager quit, `| head`) is not an error
fn ignore_broken_pipe(result: io::Result<()>) -> Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}

/// Split a command line on whitespace into program and arguments
fn split_command(command: &str) -> (&str, Vec<&str>) {
    let mut parts = command.split_whitespace();
    let program = parts.next().unwrap_or(command);
    (program, parts.collect())
}
