//! Style registry
//!
//! This module is the single source of ANSI escape codes. Style names
//! from the configuration (`"cyan"`, `"bg_red"`, `"bold"`, ...) resolve
//! to escape sequences here; unknown names resolve to the empty string,
//! which callers treat as "no styling".

/// Escape sequence that clears all attributes
pub const RESET: &str = "\x1b[0m";

/// Terminal colors (ANSI 16-color palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color name (`"red"`, `"bright_red"` or `"brightred"`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            "bright_black" | "brightblack" => Some(Color::BrightBlack),
            "bright_red" | "brightred" => Some(Color::BrightRed),
            "bright_green" | "brightgreen" => Some(Color::BrightGreen),
            "bright_yellow" | "brightyellow" => Some(Color::BrightYellow),
            "bright_blue" | "brightblue" => Some(Color::BrightBlue),
            "bright_magenta" | "brightmagenta" => Some(Color::BrightMagenta),
            "bright_cyan" | "brightcyan" => Some(Color::BrightCyan),
            "bright_white" | "brightwhite" => Some(Color::BrightWhite),
            _ => None,
        }
    }

    /// Foreground escape code
    pub fn fg_code(self) -> &'static str {
        match self {
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
            Color::BrightBlack => "\x1b[90m",
            Color::BrightRed => "\x1b[91m",
            Color::BrightGreen => "\x1b[92m",
            Color::BrightYellow => "\x1b[93m",
            Color::BrightBlue => "\x1b[94m",
            Color::BrightMagenta => "\x1b[95m",
            Color::BrightCyan => "\x1b[96m",
            Color::BrightWhite => "\x1b[97m",
        }
    }

    /// Background escape code, `None` for the bright colors
    pub fn bg_code(self) -> Option<&'static str> {
        match self {
            Color::Black => Some("\x1b[40m"),
            Color::Red => Some("\x1b[41m"),
            Color::Green => Some("\x1b[42m"),
            Color::Yellow => Some("\x1b[43m"),
            Color::Blue => Some("\x1b[44m"),
            Color::Magenta => Some("\x1b[45m"),
            Color::Cyan => Some("\x1b[46m"),
            Color::White => Some("\x1b[47m"),
            _ => None,
        }
    }
}

/// A named terminal style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Reset,
    Bold,
    Italic,
    Underline,
    Fg(Color),
    /// Only the eight base colors have a background variant
    Bg(Color),
}

impl Style {
    /// Parse a style keyword as used in language `styles` tables
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "reset" => Some(Style::Reset),
            "bold" => Some(Style::Bold),
            "italic" => Some(Style::Italic),
            "underline" => Some(Style::Underline),
            _ => match name.strip_prefix("bg_") {
                Some(color) => Color::from_name(color)
                    .filter(|c| c.bg_code().is_some())
                    .map(Style::Bg),
                None => Color::from_name(name).map(Style::Fg),
            },
        }
    }

    /// Escape code for this style
    pub fn escape_code(self) -> &'static str {
        match self {
            Style::Reset => RESET,
            Style::Bold => "\x1b[1m",
            Style::Italic => "\x1b[3m",
            Style::Underline => "\x1b[4m",
            Style::Fg(color) => color.fg_code(),
            Style::Bg(color) => color.bg_code().unwrap_or(""),
        }
    }
}

/// Resolve a style keyword to its escape code
///
/// Never fails: an unknown keyword yields `""`.
pub fn resolve(name: &str) -> &'static str {
    Style::from_name(name).map_or("", Style::escape_code)
}

/// Wrap `text` in the given style followed by a reset
///
/// Unknown styles leave the text untouched.
pub fn colorize(text: &str, style: &str) -> String {
    let code = resolve(style);
    if code.is_empty() {
        return text.to_string();
    }
    format!("{code}{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("reset", "\x1b[0m")]
    #[case("bold", "\x1b[1m")]
    #[case("italic", "\x1b[3m")]
    #[case("underline", "\x1b[4m")]
    #[case("red", "\x1b[31m")]
    #[case("cyan", "\x1b[36m")]
    #[case("white", "\x1b[37m")]
    #[case("bg_black", "\x1b[40m")]
    #[case("bg_magenta", "\x1b[45m")]
    #[case("bright_blue", "\x1b[94m")]
    #[case("brightred", "\x1b[91m")]
    fn test_resolve_known(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(resolve(name), expected);
    }

    #[rstest]
    #[case("")]
    #[case("nonexistent")]
    #[case("Cyan")]
    #[case("bg_")]
    #[case("bg_bright_red")]
    fn test_resolve_unknown_is_empty(#[case] name: &str) {
        assert_eq!(resolve(name), "");
    }

    #[test]
    fn test_colorize() {
        assert_eq!(colorize("error", "red"), "\x1b[31merror\x1b[0m");
        assert_eq!(colorize("plain", "no-such-style"), "plain");
    }

    #[test]
    fn test_background_only_for_base_colors() {
        assert_eq!(Style::from_name("bg_cyan"), Some(Style::Bg(Color::Cyan)));
        assert_eq!(Color::BrightCyan.bg_code(), None);
    }
}
