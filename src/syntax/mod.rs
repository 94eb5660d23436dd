//! Syntax highlighting engine
//!
//! - `style`: style names to ANSI escape codes
//! - `rules`: compiling language rules into regex matchers
//! - `highlighter`: matching and rendering a single line
//! - `processor`: splitting input into lines and applying display options

pub mod builtin;
mod highlighter;
mod processor;
mod rules;
pub mod style;
mod tokens;

pub use highlighter::LineHighlighter;
pub use processor::{Highlighter, LineEnding, Options};
pub use rules::{compile, CompiledRule};
pub use tokens::{OverlapMode, Token};
