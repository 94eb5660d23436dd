//! hilicat - cat with regex-driven syntax highlighting
//!
//! The engine lives in [`syntax`]: a language's rules are compiled once
//! into a [`syntax::LineHighlighter`], and a [`syntax::Highlighter`]
//! session turns a stream of byte chunks into highlighted, optionally
//! numbered lines.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod reader;
pub mod syntax;
