//! Tokens produced while highlighting a line

/// A styled span of one line
///
/// Offsets are byte positions into the line and always fall on char
/// boundaries, since they come from regex matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Byte offset where this token starts (inclusive)
    pub start: usize,
    /// Byte offset where this token ends (exclusive)
    pub end: usize,
    /// Escape code to emit before the token, empty for unstyled
    pub style_code: &'static str,
}

impl Token {
    pub fn new(start: usize, end: usize, style_code: &'static str) -> Self {
        Self {
            start,
            end,
            style_code,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether this token shares at least one byte with `other`
    pub fn overlaps(&self, other: &Token) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// How tokens from different rules are reconciled before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapMode {
    /// Render tokens in the order rules produced them, with no arbitration.
    /// Overlapping matches from different rules repeat text and nest codes.
    #[default]
    Collected,
    /// Sort by start offset and drop any token that begins inside an
    /// already accepted one. Ties go to the earlier rule.
    Merge,
}

/// Reduce tokens to an ordered, non-overlapping list
pub fn merge_overlaps(mut tokens: Vec<Token>) -> Vec<Token> {
    // Stable sort keeps declaration order for equal starts
    tokens.sort_by_key(|t| t.start);

    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut last_end = 0;
    for token in tokens {
        if token.is_empty() || token.start < last_end {
            continue;
        }
        last_end = token.end;
        merged.push(token);
    }
    merged
}
