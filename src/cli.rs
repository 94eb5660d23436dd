//! Command-line interface for hilicat.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::reader::Source;
use crate::syntax::{LineEnding, Options, OverlapMode};

const EXAMPLES: &str = "\
Examples:
  hilicat file.go                         Highlight a Go file
  cat file.json | hilicat --lang json     Highlight JSON from stdin
  hilicat --config /path/to/config.json file.py
  hilicat --less large_file.go            View highlighted file in less

Set HILICAT_LOG=debug for diagnostics and HILICAT_PAGER to replace 'less -R'.";

/// hilicat - cat with regex-driven syntax highlighting
#[derive(Parser, Debug)]
#[command(name = "hilicat")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Path to the configuration file (created with defaults if missing)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Language for syntax highlighting (required when reading from stdin)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Line ending to split input on
    #[arg(long, value_enum, default_value_t = LineEndingArg::Auto)]
    pub line_ending: LineEndingArg,

    /// Number all output lines
    #[arg(short = 'n', long)]
    pub number: bool,

    /// Number non-blank output lines; blank lines are padded
    #[arg(short = 'b', long)]
    pub number_nonblank: bool,

    /// Suppress repeated empty output lines
    #[arg(short = 's', long)]
    pub squeeze_blank: bool,

    /// Display $ at end of each line
    #[arg(short = 'E', long)]
    pub show_ends: bool,

    /// Pipe output to 'less -R' for paged viewing
    #[arg(long = "less", visible_alias = "pager")]
    pub pager: bool,

    /// When to emit color codes
    #[arg(long, value_enum, default_value_t = ColorMode::Always)]
    pub color: ColorMode,

    /// Drop matches that start inside an earlier match instead of repeating text
    #[arg(long)]
    pub merge_overlaps: bool,

    /// List the languages in the configuration and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Files to display; '-' or none reads standard input
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// `--line-ending` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineEndingArg {
    /// Detect from the first chunk of input
    Auto,
    Lf,
    Crlf,
}

impl LineEndingArg {
    /// Pick the line ending, looking at `sample` only in auto mode
    pub fn resolve(self, sample: &[u8]) -> LineEnding {
        match self {
            LineEndingArg::Auto => LineEnding::detect(sample),
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::Crlf,
        }
    }
}

/// `--color` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Always,
    /// Only when stdout is a terminal
    Auto,
    Never,
}

impl ColorMode {
    pub fn enabled(self, stdout_is_tty: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Auto => stdout_is_tty,
            ColorMode::Never => false,
        }
    }
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            number_lines: self.number,
            number_non_blank: self.number_nonblank,
            squeeze_blank: self.squeeze_blank,
            show_ends: self.show_ends,
        }
    }

    pub fn overlap_mode(&self) -> OverlapMode {
        if self.merge_overlaps {
            OverlapMode::Merge
        } else {
            OverlapMode::Collected
        }
    }

    /// Inputs in command-line order
    pub fn sources(&self) -> Vec<Source> {
        if self.files.is_empty() {
            return vec![Source::Stdin];
        }
        self.files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    Source::Stdin
                } else {
                    Source::File(path.clone())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hilicat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.lang, None);
        assert_eq!(cli.config, None);
        assert_eq!(cli.line_ending, LineEndingArg::Auto);
        assert_eq!(cli.color, ColorMode::Always);
        assert!(!cli.pager);
        assert_eq!(cli.options(), Options::default());
        assert_eq!(cli.overlap_mode(), OverlapMode::Collected);
        assert_eq!(cli.sources(), vec![Source::Stdin]);
    }

    #[rstest]
    #[case(&["--lang", "go"], Some("go"), false, false)]
    #[case(&["-n"], None, true, false)]
    #[case(&["--less"], None, false, true)]
    #[case(&["--pager"], None, false, true)]
    #[case(&["--lang", "json", "-n", "--less"], Some("json"), true, true)]
    fn test_flag_parsing(
        #[case] args: &[&str],
        #[case] lang: Option<&str>,
        #[case] number: bool,
        #[case] pager: bool,
    ) {
        let cli = parse(args);
        assert_eq!(cli.lang.as_deref(), lang);
        assert_eq!(cli.number, number);
        assert_eq!(cli.pager, pager);
    }

    #[test]
    fn test_display_options() {
        let cli = parse(&["-b", "--squeeze-blank", "-E", "--number"]);
        assert_eq!(
            cli.options(),
            Options {
                number_lines: true,
                number_non_blank: true,
                squeeze_blank: true,
                show_ends: true,
            }
        );
    }

    #[test]
    fn test_long_option_names() {
        let cli = parse(&["--number-nonblank", "--show-ends", "--merge-overlaps"]);
        assert!(cli.number_nonblank);
        assert!(cli.show_ends);
        assert_eq!(cli.overlap_mode(), OverlapMode::Merge);
    }

    #[test]
    fn test_sources() {
        let cli = parse(&["a.go", "-", "b.json"]);
        assert_eq!(
            cli.sources(),
            vec![
                Source::File(PathBuf::from("a.go")),
                Source::Stdin,
                Source::File(PathBuf::from("b.json")),
            ]
        );
    }

    #[test]
    fn test_invalid_line_ending_rejected() {
        assert!(Cli::try_parse_from(["hilicat", "--line-ending", "cr"]).is_err());
    }

    #[rstest]
    #[case(LineEndingArg::Auto, b"a\r\nb", LineEnding::Crlf)]
    #[case(LineEndingArg::Auto, b"a\nb", LineEnding::Lf)]
    #[case(LineEndingArg::Lf, b"a\r\nb", LineEnding::Lf)]
    #[case(LineEndingArg::Crlf, b"a\nb", LineEnding::Crlf)]
    fn test_line_ending_resolve(
        #[case] arg: LineEndingArg,
        #[case] sample: &[u8],
        #[case] expected: LineEnding,
    ) {
        assert_eq!(arg.resolve(sample), expected);
    }

    #[test]
    fn test_color_mode() {
        assert!(ColorMode::Always.enabled(false));
        assert!(ColorMode::Auto.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
