//! Snow: a small recursive-descent parser for a mixed text/tag markup
//! language, plus the declarative tagset machinery that resolves a tag's
//! positional and named arguments against a schema.
//!
//! The parser never recovers from a syntax error - the first one aborts
//! the parse and is returned as a [`ParseError`]. See [`load`]/[`loads`]
//! for the two entry points, and [`TagSet`] for how tag schemas are
//! declared.

pub mod cursor;
pub mod error;
pub mod lex;
mod parser;
pub mod tagset;
pub mod value;
pub mod visit;

#[cfg(test)]
mod tests;

pub use error::{ConversionError, ParseError};
pub use lex::Number;
pub use parser::Parser;
pub use tagset::{AttrDefault, Attribute, TagDef, TagSet};
pub use value::{Document, Section, Tag, Text, Value};
pub use visit::Visit;

use std::io::{self, Read};

/// Parses `text` as a standalone Snow document, recording `"<string>"` as
/// its source (§6.2).
pub fn loads(tagset: &TagSet, text: &str) -> Result<Document, ParseError> {
    Parser::new(text, tagset).parse_document("<string>")
}

/// Reads `reader` eagerly to a string and parses it as a Snow document,
/// recording `name` as its source.
///
/// Rust's `Read` has no portable equivalent of Python's `f.name`, so the
/// name a `Document` should carry is supplied explicitly rather than
/// inferred from the reader - see DESIGN.md's note on this divergence
/// from `examples/original_source/snow.py`'s `Parser.load`.
pub fn load(tagset: &TagSet, name: &str, mut reader: impl Read) -> io::Result<Result<Document, ParseError>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(Parser::new(&text, tagset).parse_document(name))
}
