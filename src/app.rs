//! Runs highlighting sessions over a list of inputs
//!
//! Each input gets its own `Highlighter` session. The session is created
//! once the first chunk has arrived, so the line ending can be detected
//! from real data without consuming any of it.

use std::collections::HashMap;
use std::io::{self, Read, Write};

use crossterm::tty::IsTty;

use crate::cli::{Cli, LineEndingArg};
use crate::config::Config;
use crate::error::{HighlightError, Result};
use crate::reader::{spawn_reader, Source, CHANNEL_CAPACITY, CHUNK_SIZE};
use crate::syntax::style::colorize;
use crate::syntax::{Highlighter, LineHighlighter, Options, OverlapMode};

/// Everything that stays fixed for a whole run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Language for every input; detected per file when `None`
    pub lang: Option<String>,
    pub line_ending: LineEndingArg,
    pub options: Options,
    pub overlap: OverlapMode,
    /// Emit escape codes at all
    pub color: bool,
}

impl Settings {
    pub fn from_cli(cli: &Cli, stdout_is_tty: bool) -> Self {
        Self {
            lang: cli.lang.clone(),
            line_ending: cli.line_ending,
            options: cli.options(),
            overlap: cli.overlap_mode(),
            color: cli.color.enabled(stdout_is_tty),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: None,
            line_ending: LineEndingArg::Auto,
            options: Options::default(),
            overlap: OverlapMode::default(),
            color: true,
        }
    }
}

/// Outcome of a run over several inputs
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub processed: usize,
    pub failed: usize,
}

impl RunStatus {
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

pub struct App {
    config: Config,
    settings: Settings,
    /// Compiled highlighters by language id
    engines: HashMap<String, LineHighlighter>,
}

impl App {
    pub fn new(config: Config, settings: Settings) -> Self {
        Self {
            config,
            settings,
            engines: HashMap::new(),
        }
    }

    /// Highlight every source in order, writing to `out`
    ///
    /// A failing input is reported and skipped. A closed output ends the
    /// run early without error.
    pub fn run<W: Write>(&mut self, sources: &[Source], out: &mut W) -> RunStatus {
        let mut status = RunStatus::default();

        for source in sources {
            match self.highlight_source(source, out) {
                Ok(()) => status.processed += 1,
                Err(HighlightError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
                    log::debug!("output closed while writing {}", source);
                    break;
                }
                Err(e) => {
                    status.failed += 1;
                    report_error(&format!("{source}: {e}"));
                }
            }
        }

        status
    }

    fn highlight_source<W: Write>(&mut self, source: &Source, out: &mut W) -> Result<()> {
        let engine = self.engine_for(source)?;
        let input = source.open()?;
        self.stream(engine, input, out)
    }

    /// Resolve the language for `source` and compile it once per run
    fn engine_for(&mut self, source: &Source) -> Result<LineHighlighter> {
        let lang = match (&self.settings.lang, source.path()) {
            (Some(lang), _) => lang.clone(),
            (None, Some(path)) => self
                .config
                .detect_language(path)
                .map(str::to_string)
                .ok_or_else(|| HighlightError::UnknownLanguage(path.to_path_buf()))?,
            (None, None) => return Err(HighlightError::MissingLanguage),
        };

        if !self.settings.color {
            // Still validate the language so the outcome does not depend on
            // whether stdout is a terminal
            self.compiled(&lang)?;
            return Ok(LineHighlighter::plain());
        }

        self.compiled(&lang)
    }

    fn compiled(&mut self, lang: &str) -> Result<LineHighlighter> {
        if let Some(engine) = self.engines.get(lang) {
            return Ok(engine.clone());
        }

        let definition = self
            .config
            .language(lang)
            .ok_or_else(|| HighlightError::LanguageNotFound(lang.to_string()))?;
        let engine = LineHighlighter::new(definition)?.with_overlap_mode(self.settings.overlap);
        log::debug!("compiled {} rules for {}", engine.rule_count(), lang);

        self.engines.insert(lang.to_string(), engine.clone());
        Ok(engine)
    }

    /// Pump one input through a fresh session
    pub fn stream<R, W>(&self, engine: LineHighlighter, input: R, out: &mut W) -> Result<()>
    where
        R: Read + Send + 'static,
        W: Write,
    {
        let (chunks, reader) = spawn_reader(input, CHUNK_SIZE, CHANNEL_CAPACITY);
        let mut chunks = chunks.iter();

        let first = match chunks.next() {
            None => return Ok(()),
            Some(chunk) => chunk?,
        };

        let line_ending = self.settings.line_ending.resolve(&first);
        log::debug!("line ending {:?}", line_ending);
        let mut session = Highlighter::with_engine(engine, line_ending, self.settings.options);
        out.write_all(session.process_content(&first).as_bytes())?;

        let mut read_error = None;
        for chunk in chunks {
            match chunk {
                Ok(data) => out.write_all(session.process_content(&data).as_bytes())?,
                Err(e) => {
                    read_error = Some(e);
                    break;
                }
            }
        }

        // Whatever was read before an error is still shown
        out.write_all(session.finish().as_bytes())?;
        out.flush()?;

        if reader.join().is_err() {
            log::error!("reader thread panicked");
        }
        log::trace!("line counter ended at {}", session.line_number());

        match read_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

/// Print an error to stderr, in red when stderr is a terminal
pub fn report_error(message: &str) {
    log::error!("{}", message);
    let label = if io::stderr().is_tty() {
        colorize("Error:", "red")
    } else {
        "Error:".to_string()
    };
    eprintln!("{label} {message}");
}
