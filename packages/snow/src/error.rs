use thiserror::Error;

/// An error produced while parsing a Snow document.
///
/// There is exactly one diagnostic *shape*: a message plus the line and
/// column at which the parser gave up. Parsing never recovers, so the
/// first error aborts the whole parse (see [`crate::load`]/[`crate::loads`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} (ln: {line} col: {col})")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub col: usize,
    /// Any extra diagnostic data attached by the call site that raised this
    /// error. Unused by the parser itself today, but kept so embedders
    /// building richer diagnostics on top of Snow have somewhere to put
    /// context without changing the error's shape.
    pub extra: Option<String>,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            extra: None,
        }
    }
}

/// An error produced when coercing a [`crate::Value`] to a type it cannot
/// represent (e.g. asking a `Tag` for its `toText`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot convert {from} to {to}")]
pub struct ConversionError {
    /// The name of the variant being converted from (`"Text"`, `"Tag"`,
    /// `"Section"`, `"Document"`).
    pub from: &'static str,
    /// The name of the target representation (`"Text"`, `"Tag"`,
    /// `"Section"`, `"Number"`).
    pub to: &'static str,
}

impl ConversionError {
    pub fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }
}
