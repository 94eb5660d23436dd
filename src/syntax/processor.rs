//! Content processing
//!
//! A `Highlighter` is one highlighting session for one input stream. It
//! splits incoming bytes into lines, applies the cat-style display options
//! and hands each line to the `LineHighlighter`. Bytes after the last line
//! ending of a chunk are held back until the next chunk (or `finish`), so
//! a line split across two reads is still processed as one line.

use super::highlighter::LineHighlighter;
use crate::config::Config;
use crate::error::{HighlightError, Result};

/// Line terminator used to split input and join output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }

    /// CRLF if any `\r\n` pair appears in `data`, LF otherwise
    pub fn detect(data: &[u8]) -> Self {
        if data.windows(2).any(|w| w == b"\r\n") {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }
}

/// Display options, mirroring cat's `-n`, `-b`, `-s` and `-E`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Number all output lines
    pub number_lines: bool,
    /// Number non-blank lines only; blank lines get padding instead of a number
    pub number_non_blank: bool,
    /// Collapse runs of blank lines to a single blank line
    pub squeeze_blank: bool,
    /// Append `$` to every line
    pub show_ends: bool,
}

/// Width of the right-aligned line number column
const NUMBER_WIDTH: usize = 5;

/// Per-stream highlighting session
#[derive(Debug)]
pub struct Highlighter {
    engine: LineHighlighter,
    line_ending: LineEnding,
    options: Options,
    /// Line counter; with `-n` it also advances on padded blank lines
    line_num: usize,
    last_line_was_blank: bool,
    /// Trailing bytes of the previous chunk that did not end a line
    pending: Vec<u8>,
}

impl Highlighter {
    /// Create a session for `language` from the loaded configuration
    pub fn new(
        config: &Config,
        language: &str,
        line_ending: LineEnding,
        options: Options,
    ) -> Result<Self> {
        let lang = config
            .language(language)
            .ok_or_else(|| HighlightError::LanguageNotFound(language.to_string()))?;
        let engine = LineHighlighter::new(lang)?;
        Ok(Self::with_engine(engine, line_ending, options))
    }

    /// Create a session around an already compiled highlighter
    pub fn with_engine(engine: LineHighlighter, line_ending: LineEnding, options: Options) -> Self {
        Self {
            engine,
            line_ending,
            options,
            line_num: 0,
            last_line_was_blank: false,
            pending: Vec::new(),
        }
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Current value of the line counter
    pub fn line_number(&self) -> usize {
        self.line_num
    }

    /// Whether a partial line is waiting for more input
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Process a chunk of input and return the highlighted complete lines
    ///
    /// Any bytes after the last line ending are kept for the next call. The
    /// carry-over has no size limit: input without a line ending (a
    /// minified file, say) is buffered whole until `finish`.
    pub fn process_content(&mut self, data: &[u8]) -> String {
        let sep = self.line_ending.as_str().as_bytes();

        // `pending` never holds a full separator, so only the tail of it
        // plus the new data needs searching
        let search_from = self.pending.len().saturating_sub(sep.len() - 1);
        self.pending.extend_from_slice(data);

        let last_sep = self.pending[search_from..]
            .windows(sep.len())
            .rposition(|w| w == sep);
        let Some(pos) = last_sep else {
            return String::new();
        };

        let cut = search_from + pos + sep.len();
        let complete: Vec<u8> = self.pending.drain(..cut).collect();
        self.process_lines(&complete)
    }

    /// Flush a final line that had no line ending
    ///
    /// The line is emitted with the line ending appended, the same as if
    /// the input had been terminated.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        let rest = std::mem::take(&mut self.pending);
        self.process_lines(&rest)
    }

    fn process_lines(&mut self, data: &[u8]) -> String {
        let content = String::from_utf8_lossy(data);
        let ending = self.line_ending.as_str();

        let mut lines: Vec<&str> = content.split(ending).collect();
        // A trailing terminator leaves an empty segment that is not a line
        if lines.last() == Some(&"") {
            lines.pop();
        }

        let mut output = String::with_capacity(content.len() + lines.len() * 8);
        for line in lines {
            self.process_line(line, &mut output);
        }
        output
    }

    fn process_line(&mut self, line: &str, output: &mut String) {
        let is_blank = line.trim().is_empty();

        if self.options.squeeze_blank && is_blank && self.last_line_was_blank {
            return;
        }
        self.last_line_was_blank = is_blank;

        let Options {
            number_lines,
            number_non_blank,
            ..
        } = self.options;
        // `-n` counts every line even where `-b` blanks out the number
        if number_lines || (number_non_blank && !is_blank) {
            self.line_num += 1;
        }
        if number_non_blank && is_blank {
            output.push_str(&" ".repeat(NUMBER_WIDTH));
        } else if number_lines || number_non_blank {
            output.push_str(&format!("{:>width$}  ", self.line_num, width = NUMBER_WIDTH));
        }

        output.push_str(&self.engine.highlight_line(line));

        if self.options.show_ends {
            output.push('$');
        }
        output.push_str(self.line_ending.as_str());
    }
}
