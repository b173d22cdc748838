//! The recursive-descent parser (§4.D): turns source text plus a
//! [`TagSet`] into a [`Document`].
//!
//! Four mutually-recursive contexts, each the Rust shape of the matching
//! Python method in `examples/original_source/snow.py`: `parse_doc_items`
//! (`_parse_doc`), `parse_section` (`_parse_section`), `parse_tag`
//! (`_parse_tag`), `parse_value` (`_parse_value`).

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::lex;
use crate::tagset::TagSet;
use crate::value::{Document, Section, Text, Value};
use indexmap::IndexMap;

/// What parsing a `{...}` at the cursor produced.
enum TagOutcome {
    /// No `{` was found here at all.
    NoMatch,
    /// A `{...}` was consumed, but its name was bound to the tagset's
    /// suppress sentinel - the caller drops it from whatever list it's
    /// building, but parsing continues past it.
    Suppressed,
    Value(Value),
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    tagset: &'a TagSet,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str, tagset: &'a TagSet) -> Self {
        Self {
            cursor: Cursor::new(text),
            tagset,
        }
    }

    /// Parses the whole input as a document, labelling the result with
    /// `src` (a filename, or the `"<string>"` sentinel for in-memory
    /// sources).
    pub fn parse_document(&mut self, src: impl Into<String>) -> Result<Document, ParseError> {
        let items = self.parse_doc_items(lex::doc_text)?;
        Ok(Document {
            src: src.into(),
            items,
        })
    }

    /// The shared text/tag interleaving loop underlying both the document
    /// root and section bodies (`_parse_doc` in the original). Loops while
    /// *either* a text run or a tag was consumed on the previous pass;
    /// stops once a pass consumes neither.
    ///
    /// Diverges from `examples/original_source/snow.py` in one respect: a
    /// *suppressed* tag still counts as "consumed something" for the
    /// purposes of continuing the loop. The original treats a suppressed
    /// tag's falsy return the same as "no tag found at all", which stops
    /// the loop even though the cursor has moved past the `{...}` -
    /// silently dropping everything after a suppressed tag. §9's open
    /// question ("the surrounding list must tolerate a missing element")
    /// reads as ruling this out, so the loop here keeps going.
    fn parse_doc_items(&mut self, pattern: lex::Pattern) -> Result<Vec<Value>, ParseError> {
        let mut elems = Vec::new();
        loop {
            let text = self.cursor.maybe(pattern).unwrap_or("");
            let matched_text = !text.is_empty();
            if matched_text {
                elems.push(Value::text(normalize_newlines(text)));
            }

            let outcome = self.parse_tag()?;
            let matched_tag = !matches!(outcome, TagOutcome::NoMatch);
            if let TagOutcome::Value(v) = outcome {
                elems.push(v);
            }

            if !matched_text && !matched_tag {
                break;
            }
        }
        Ok(elems)
    }

    /// Parses a bracketed `[...]` section, or returns `None` if there's no
    /// `[` here.
    fn parse_section(&mut self) -> Result<Option<Value>, ParseError> {
        if self.cursor.maybe(lex::open_brack).is_none() {
            return Ok(None);
        }

        let elems = self.parse_doc_items(lex::notag_text)?;
        let elems = elems
            .into_iter()
            .map(|v| match v {
                Value::Text(t) => Value::Text(Text::new(lex::collapse_structural_escapes(
                    t.as_str(),
                    &['{', ']'],
                ))),
                other => other,
            })
            .collect();

        self.cursor.expect(lex::close_brack, "]")?;
        self.cursor.maybe(lex::whitespace);

        Ok(Some(Value::Section(Section::new(elems))))
    }

    /// Parses a `{...}` tag, implementing §4.D's attribute-resolution and
    /// duplicate-key section-merging algorithms.
    fn parse_tag(&mut self) -> Result<TagOutcome, ParseError> {
        if self.cursor.maybe(lex::open_brace).is_none() {
            return Ok(TagOutcome::NoMatch);
        }
        self.cursor.maybe(lex::whitespace);

        let mut positional: Vec<Value> = Vec::new();
        let mut named: IndexMap<Text, Value> = IndexMap::new();

        while self.cursor.maybe(lex::close_brace).is_none() {
            let val = self.parse_value()?;
            self.cursor.maybe(lex::whitespace);

            if self.cursor.maybe(lex::colon).is_some() {
                self.cursor.mark_lastrel();
                self.cursor.maybe(lex::whitespace);
                let dat = self.parse_value()?;

                let key = val.to_text().map_err(|_| {
                    ParseError::new(
                        "Named attribute keys must be text.",
                        self.cursor.line(),
                        self.cursor.col(),
                    )
                })?;

                match named.get_mut(&key) {
                    Some(existing) => match existing {
                        Value::Section(s) => s.0.push(dat),
                        other => {
                            let old = std::mem::replace(other, Value::text(""));
                            *other = Value::Section(Section::new(vec![old, dat]));
                        }
                    },
                    None => {
                        named.insert(key, dat);
                    }
                }
            } else {
                positional.push(val);
            }
            self.cursor.maybe(lex::whitespace);
        }
        self.cursor.maybe(lex::whitespace);

        if positional.is_empty() {
            return Err(ParseError::new(
                "Tags must have a name",
                self.cursor.line(),
                self.cursor.col(),
            ));
        }
        let name_value = positional.remove(0);
        let name = name_value.to_text().map_err(|_| {
            ParseError::new(
                "Tag names must be text.",
                self.cursor.line(),
                self.cursor.col(),
            )
        })?;

        match self.tagset.build_tag(name, positional, named) {
            Some(tag) => Ok(TagOutcome::Value(Value::Tag(tag))),
            None => Ok(TagOutcome::Suppressed),
        }
    }

    /// Parses one `value` alternative: string, name, tag, or section, in
    /// that order, falling through to a diagnostic table (§4.D "Error
    /// reporting") once all four have failed to match.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        if let Some(m) = self.cursor.maybe(lex::string) {
            let tok =
                lex::match_string(m).expect("lex::string only matches what match_string parses");
            let content = if tok.raw {
                tok.content.to_string()
            } else {
                lex::unescape(tok.content)
            };
            return Ok(Value::text(content));
        }
        if let Some(m) = self.cursor.maybe(lex::name) {
            return Ok(Value::text(m));
        }

        // A suppressed tag used directly in value position falls through
        // exactly like `NoMatch` here - `examples/original_source/snow.py`
        // treats both as falsy in `_parse_value`, and the cursor has
        // already moved past the `{...}` either way, so there's no
        // alternative left to try but a section.
        if let TagOutcome::Value(v) = self.parse_tag()? {
            return Ok(v);
        }

        if let Some(section) = self.parse_section()? {
            return Ok(section);
        }

        Err(self.value_error())
    }

    /// §4.D's error-reporting table, used once every `value` alternative
    /// has failed to match.
    fn value_error(&mut self) -> ParseError {
        if self.cursor.at_eof() {
            return ParseError::new(
                "Reached end of string/file while parsing a tag.",
                self.cursor.line(),
                self.cursor.col(),
            );
        }

        if let Some(m) = self.cursor.maybe(lex::quote_start) {
            let quote =
                lex::quote_char_at(m).expect("quote_start only matches a recognized quote prefix");
            return ParseError::new(
                format!("Missing terminating {quote} character"),
                self.cursor.line(),
                self.cursor.col(),
            );
        }

        if self.cursor.maybe(lex::close_brack).is_some() {
            return ParseError::new(
                "Unexpected close bracket ]. Did you forget to close a tag?",
                self.cursor.line(),
                self.cursor.col().saturating_sub(1),
            );
        }

        if self.cursor.maybe(lex::close_brace).is_some() {
            let (line, col) = self.cursor.lastrel_line_col();
            return ParseError::new(
                "Forgot to assign a value to the named attribute.",
                line,
                col,
            );
        }

        if self.cursor.maybe(lex::control).is_some() {
            return ParseError::new(
                "Control characters are disallowed in unquoted text.",
                self.cursor.line(),
                self.cursor.col().saturating_sub(1),
            );
        }

        if let Some(m) = self.cursor.maybe(lex::whitespace) {
            return ParseError::new(
                "Expected a value, found whitespace. There's a problem with the API's parser code.",
                self.cursor.line(),
                self.cursor.col().saturating_sub(m.chars().count()),
            );
        }

        let snippet: String = self.cursor.rest().chars().take(8).collect();
        ParseError::new(
            format!("Something went horribly wrong. Expected value, got \"{snippet}\""),
            self.cursor.line(),
            self.cursor.col(),
        )
    }
}

/// Collapses `\r\n` and lone `\r` to `\n` in matched text runs (§4.D
/// "Newlines in text are normalized to `\n`").
fn normalize_newlines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}
