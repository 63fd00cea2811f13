//! difftool - two-file comparison tool
//!
//! This library provides the command-line argument model: a recursive
//! grammar over the raw token list that resolves two sources to compare
//! and an output display mode.

pub use args::{parse, Argument, Output};
pub use error::ParseError;
pub use source::{Source, SourceError};

mod args;
mod error;
mod source;
