//! Single-line highlighting
//!
//! A `LineHighlighter` holds the compiled rules of one language with
//! their styles already resolved, and turns a line of text into the same
//! line with ANSI codes wrapped around every match.

use std::borrow::Cow;
use std::collections::HashMap;

use super::rules::{compile, CompiledRule};
use super::style::{self, RESET};
use super::tokens::{merge_overlaps, OverlapMode, Token};
use crate::config::Language;
use crate::error::Result;

/// Compiled, immutable highlighting rules for one language
#[derive(Debug, Clone, Default)]
pub struct LineHighlighter {
    rules: Vec<CompiledRule>,
    /// Escape code per rule, same order as `rules`
    style_codes: Vec<&'static str>,
    overlap: OverlapMode,
}

impl LineHighlighter {
    /// Compile a language definition
    pub fn new(language: &Language) -> Result<Self> {
        let rules = compile(&language.rules)?;
        Ok(Self::from_rules(rules, &language.styles))
    }

    /// Build from already compiled rules and a style table
    ///
    /// A rule whose style name is missing from `styles`, or maps to an
    /// unknown keyword, highlights nothing visible.
    pub fn from_rules(rules: Vec<CompiledRule>, styles: &HashMap<String, String>) -> Self {
        let style_codes = rules
            .iter()
            .map(|rule| styles.get(&rule.style).map_or("", |keyword| style::resolve(keyword)))
            .collect();

        Self {
            rules,
            style_codes,
            overlap: OverlapMode::default(),
        }
    }

    /// A highlighter with no rules: every line comes back unchanged
    pub fn plain() -> Self {
        Self::default()
    }

    /// Builder: set how overlapping matches are handled
    pub fn with_overlap_mode(mut self, overlap: OverlapMode) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn overlap_mode(&self) -> OverlapMode {
        self.overlap
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Find every match of every rule, rule by rule in declaration order
    pub fn tokens(&self, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for (rule, &code) in self.rules.iter().zip(&self.style_codes) {
            tokens.extend(rule.find_all(line).map(|(start, end)| Token::new(start, end, code)));
        }

        match self.overlap {
            OverlapMode::Collected => tokens,
            OverlapMode::Merge => merge_overlaps(tokens),
        }
    }

    /// Highlight one line
    ///
    /// Lines without any match are returned as-is, without allocating.
    pub fn highlight_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let tokens = self.tokens(line);
        if tokens.is_empty() {
            return Cow::Borrowed(line);
        }
        Cow::Owned(render(line, &tokens))
    }
}

/// Write `line` with every token wrapped in its style
///
/// Tokens are emitted in the order given. The gap before a token is only
/// written when the token starts past everything emitted so far.
fn render(line: &str, tokens: &[Token]) -> String {
    let mut result = String::with_capacity(line.len() + tokens.len() * 10);
    let mut last_pos = 0;

    for token in tokens {
        if token.start > last_pos {
            result.push_str(&line[last_pos..token.start]);
        }

        let text = &line[token.start..token.end];
        if token.style_code.is_empty() {
            result.push_str(text);
        } else {
            result.push_str(token.style_code);
            result.push_str(text);
            result.push_str(RESET);
        }

        last_pos = token.end;
    }

    if last_pos < line.len() {
        result.push_str(&line[last_pos..]);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HighlightRule;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const CYAN: &str = "\x1b[36m";
    const GREEN: &str = "\x1b[32m";

    fn go_like() -> Language {
        Language::new(
            &["go"],
            vec![
                HighlightRule::new("keywords", r"\b(func|package)\b", "keyword"),
                HighlightRule::new("strings", r#""[^"]*""#, "string"),
            ],
            &[("keyword", "cyan"), ("string", "green")],
        )
    }

    fn strip(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_keyword_is_wrapped() {
        let hl = LineHighlighter::new(&go_like()).unwrap();
        assert_eq!(
            hl.highlight_line("func main() {}"),
            format!("{CYAN}func{RESET} main() {{}}")
        );
    }

    #[test]
    fn test_every_occurrence_is_styled() {
        let hl = LineHighlighter::new(&go_like()).unwrap();
        assert_eq!(
            hl.highlight_line(r#"f("a", "b")"#),
            format!(r#"f({GREEN}"a"{RESET}, {GREEN}"b"{RESET})"#)
        );
    }

    #[test]
    fn test_no_match_is_borrowed() {
        let hl = LineHighlighter::new(&go_like()).unwrap();
        let line = "x := y + 1";
        let out = hl.highlight_line(line);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, line);
    }

    #[test]
    fn test_unknown_style_emits_no_codes() {
        let lang = Language::new(
            &[],
            vec![
                HighlightRule::new("missing", "foo", "not_in_table"),
                HighlightRule::new("bad_keyword", "bar", "weird"),
            ],
            &[("weird", "ultraviolet")],
        );
        let hl = LineHighlighter::new(&lang).unwrap();
        assert_eq!(hl.tokens("foo bar").len(), 2);
        assert_eq!(hl.highlight_line("foo bar"), "foo bar");
    }

    #[test]
    fn test_reset_is_a_real_style() {
        let lang = Language::new(
            &[],
            vec![HighlightRule::new("r", "x", "plain")],
            &[("plain", "reset")],
        );
        let hl = LineHighlighter::new(&lang).unwrap();
        assert_eq!(hl.highlight_line("x"), format!("{RESET}x{RESET}"));
    }

    #[test]
    fn test_whitespace_line_is_matched() {
        let lang = Language::new(
            &[],
            vec![HighlightRule::new("trailing", r"\s+$", "ws")],
            &[("ws", "bg_red")],
        );
        let hl = LineHighlighter::new(&lang).unwrap();
        assert_eq!(hl.highlight_line("   "), format!("\x1b[41m   {RESET}"));
    }

    #[test]
    fn test_collected_mode_keeps_rule_order_on_overlap() {
        // The keyword inside the string is rendered after the string,
        // repeating its text: compatibility behavior of the default mode
        let hl = LineHighlighter::new(&go_like()).unwrap();
        let line = r#""func""#;
        let tokens = hl.tokens(line);
        assert_eq!(tokens, vec![Token::new(1, 5, CYAN), Token::new(0, 6, GREEN)]);
        assert_eq!(
            hl.highlight_line(line),
            format!(r#""{CYAN}func{RESET}{GREEN}"func"{RESET}"#)
        );
    }

    #[test]
    fn test_merge_mode_resolves_overlap() {
        let hl = LineHighlighter::new(&go_like())
            .unwrap()
            .with_overlap_mode(OverlapMode::Merge);
        let line = r#"x := "func" // func"#;
        assert_eq!(
            hl.highlight_line(line),
            format!(r#"x := {GREEN}"func"{RESET} // {CYAN}func{RESET}"#)
        );
    }

    #[test]
    fn test_plain_highlighter() {
        let hl = LineHighlighter::plain();
        assert_eq!(hl.rule_count(), 0);
        assert_eq!(hl.highlight_line("func main() {}"), "func main() {}");
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        let hl = LineHighlighter::new(&go_like()).unwrap();
        let line = r#"// héllo "wörld" ✓"#;
        assert_eq!(strip(&hl.highlight_line(line)), line);
    }

    proptest! {
        /// Matches from a single rule never overlap, so stripping the
        /// escape codes gives back the input.
        #[test]
        fn property_single_rule_preserves_content(line in "[a-z0-9 (){}\"]{0,40}") {
            let lang = Language::new(
                &[],
                vec![HighlightRule::new("word", r"[a-z]+\d*", "w")],
                &[("w", "yellow")],
            );
            let hl = LineHighlighter::new(&lang).unwrap();
            prop_assert_eq!(strip(&hl.highlight_line(&line)), line);
        }

        /// Merge mode preserves content for any combination of rules.
        #[test]
        fn property_merge_preserves_content(line in "[a-z0-9 \"/]{0,40}") {
            let lang = Language::new(
                &[],
                vec![
                    HighlightRule::new("kw", r"\b(func|if|for)\b", "k"),
                    HighlightRule::new("str", r#""[^"]*""#, "s"),
                    HighlightRule::new("comment", r"//.*", "c"),
                    HighlightRule::new("num", r"\d+", "n"),
                    HighlightRule::new("empty", r"x*", "k"),
                ],
                &[("k", "cyan"), ("s", "green"), ("c", "yellow"), ("n", "magenta")],
            );
            let hl = LineHighlighter::new(&lang).unwrap().with_overlap_mode(OverlapMode::Merge);
            prop_assert_eq!(strip(&hl.highlight_line(&line)), line);
        }

        /// Text the rules cannot match comes back untouched.
        #[test]
        fn property_no_match_is_identity(line in "[A-Z ,.;]{0,40}") {
            let hl = LineHighlighter::new(&go_like()).unwrap();
            prop_assert_eq!(hl.highlight_line(&line), line.as_str());
        }
    }
}
