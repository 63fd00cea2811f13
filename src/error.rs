use thiserror::Error;

use crate::source::SourceError;

/// Error returned when an argument list does not match the difftool grammar.
///
/// There is a single error kind at this layer: whether the token list was
/// too short, a flag showed up where a source was expected, or a source
/// failed to open, the parse fails as a whole and no partial argument value
/// is produced. The message says what went wrong; callers that need the
/// underlying I/O failure can walk the error chain.
#[derive(Debug, Error)]
#[error("invalid arguments: {message}")]
pub struct ParseError {
    message: String,
    #[source]
    source: Option<SourceError>,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            source: None,
        }
    }
}

impl From<SourceError> for ParseError {
    fn from(err: SourceError) -> Self {
        ParseError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
