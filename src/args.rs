//! Command-line argument grammar for the difftool
//!
//! The grammar is deliberately tiny:
//!
//! ```text
//! <invocation-path> [--unified | --split] <source-a> <source-b>
//! ```
//!
//! The first token (the path the tool was invoked as) is skipped without
//! inspection. An optional output-mode flag follows, then exactly two
//! source tokens. A token counts as a source iff it does not start with
//! `--`; an unrecognized `--whatever` token is not skipped, it falls
//! through to the source rule and fails the whole parse. Tokens after the
//! second source are left unconsumed and never validated.
//!
//! Parsed arguments form a recursive value: zero or more [`Argument::OutputFlag`]
//! layers wrapping a single [`Argument::Sources`] leaf. The accessors walk
//! that chain, so the same code serves values built by [`parse`] (always
//! exactly one flag layer) and values constructed by hand.

use crate::error::ParseError;
use crate::source::Source;

/// How the comparison result should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Single interleaved view.
    Unified,
    /// Side-by-side view.
    Split,
}

impl Default for Output {
    fn default() -> Self {
        Output::Split
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Unified => write!(f, "unified"),
            Output::Split => write!(f, "split"),
        }
    }
}

/// A parsed argument list.
///
/// Every well-formed value is a finite chain of `OutputFlag` layers ending
/// in exactly one `Sources` leaf.
#[derive(Debug, Clone)]
pub enum Argument {
    /// One resolved output-mode token wrapping the rest of the arguments.
    OutputFlag(Output, Box<Argument>),
    /// The two sources to compare, in left/right order.
    Sources(Source, Source),
}

impl Argument {
    /// The two sources at the base of the chain, ignoring any flag layers.
    pub fn sources(&self) -> (&Source, &Source) {
        let mut argument = self;
        loop {
            match argument {
                Argument::Sources(a, b) => return (a, b),
                Argument::OutputFlag(_, rest) => argument = rest,
            }
        }
    }

    /// The effective output mode.
    ///
    /// This is a fold, not a field access: starting from a default of
    /// [`Output::Split`], each flag layer overwrites the carried value on
    /// the way down, and the leaf returns whatever is carried at that
    /// point. With stacked layers the one closest to the leaf wins; a bare
    /// `Sources` leaf yields the default.
    pub fn output(&self) -> Output {
        let mut argument = self;
        let mut carried = Output::default();
        loop {
            match argument {
                Argument::OutputFlag(flag, rest) => {
                    carried = *flag;
                    argument = rest;
                }
                Argument::Sources(..) => return carried,
            }
        }
    }
}

/// Parse a raw argument list, invocation path included, into an [`Argument`].
///
/// Fails atomically: a short token list, a `--`-prefixed token in a source
/// position, or a source that cannot be loaded all abort the parse with no
/// partial result.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Argument, ParseError> {
    let rest = tokens
        .split_first()
        .map(|(_, rest)| rest)
        .ok_or_else(|| ParseError::new("empty argument list"))?;

    let mut cursor = rest.iter().map(AsRef::as_ref).peekable();

    // The flag sub-grammar always succeeds: an unmatched token is left in
    // place and Split is recorded as the fallback.
    let flag = match cursor.peek() {
        Some(&"--unified") => {
            cursor.next();
            Output::Unified
        }
        Some(&"--split") => {
            cursor.next();
            Output::Split
        }
        _ => Output::Split,
    };

    let first = Source::new(source_token(cursor.next())?)?;
    let second = Source::new(source_token(cursor.next())?)?;

    Ok(Argument::OutputFlag(
        flag,
        Box::new(Argument::Sources(first, second)),
    ))
}

fn source_token(token: Option<&str>) -> Result<&str, ParseError> {
    match token {
        Some(token) if !token.starts_with("--") => Ok(token),
        Some(token) => Err(ParseError::new(format!(
            "expected a source, found flag `{token}`"
        ))),
        None => Err(ParseError::new("expected two sources to compare")),
    }
}
