//! The document value algebra: `Text`, `Tag`, `Section`, `Document` (§3).
//!
//! Ported as a closed `enum` rather than the base-class-with-virtual-
//! discriminators hierarchy `examples/original_source/snow.py` uses - see
//! DESIGN.md's "Duck-typed Value hierarchy" note. Discriminators become
//! `matches!` checks and coercions become total functions returning
//! `Result<_, ConversionError>`.

use crate::error::ConversionError;
use crate::lex;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;

/// A numeric literal produced by [`Value::to_number`], per the `NUMBER`
/// grammar (§4.B).
pub type Number = lex::Number;

/// A Unicode string value, produced from quoted or unquoted literals and
/// from text runs inside sections and documents.
///
/// Also the key type for a tag's named attributes, and the type of a tag's
/// `name` - §3's invariants 1 and 2 both require these be `Text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Text(pub String);

impl Text {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for Text {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A structured invocation identified by its first positional value (the
/// tag `name`), with named and positional-overflow (`extra`) attributes
/// resolved against a [`crate::tagset::TagDef`] by the parser (§4.D).
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: Text,
    named: IndexMap<Text, Value>,
    /// Positional arguments that spilled past every declared attribute
    /// (§4.D step 2b's "positional overflow").
    pub extra: Vec<Value>,
}

impl Tag {
    pub(crate) fn new(name: Text) -> Self {
        Self {
            name,
            named: IndexMap::new(),
            extra: Vec::new(),
        }
    }

    /// Looks up a named attribute. Accepts either a `&str` or a [`Text`]
    /// key - the parser stores `Text` keys, but callers shouldn't have to
    /// care (§4.C: "lookup by `str` or by `Text` key is interchangeable").
    pub fn get<Q>(&self, key: &Q) -> Option<&Value>
    where
        Text: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.named.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Text: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.named.contains_key(key)
    }

    /// Named attributes in insertion order: declared-named (as supplied by
    /// the caller), then positional-bound, then default-injected, then
    /// extra-named - the order §4.D's attribute-resolution algorithm
    /// produces.
    pub fn named(&self) -> impl Iterator<Item = (&Text, &Value)> {
        self.named.iter()
    }

    pub fn len(&self) -> usize {
        self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut Value>
    where
        Text: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.named.get_mut(key)
    }

    pub(crate) fn insert(&mut self, key: Text, value: Value) {
        self.named.insert(key, value);
    }
}

impl std::ops::Index<&str> for Tag {
    type Output = Value;

    /// Retrieves a named attribute by `str` key, returning the
    /// default-injected value where one was filled in (§4.E). Panics if
    /// the key isn't present at all, matching a plain map index.
    fn index(&self, key: &str) -> &Value {
        self.named
            .get(key)
            .unwrap_or_else(|| panic!("tag {:?} has no attribute {key:?}", self.name))
    }
}

/// An interleaving of [`Value::Text`] and [`Value::Tag`] values: the
/// contents of a bracketed `[...]` region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section(pub Vec<Value>);

impl Section {
    pub fn new(items: Vec<Value>) -> Self {
        Self(items)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Section {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A `Section` tagged with the origin it was parsed from: a filename, or
/// the sentinel `"<string>"` for in-memory sources (§3, §6.2). Never
/// itself nested inside a `Value` (invariant 5) - a `Document` is always
/// the root of a parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub src: String,
    pub items: Vec<Value>,
}

impl Document {
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The closed sum of the four document value variants (§3).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(Text),
    Tag(Tag),
    Section(Section),
    Document(Document),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(Text::new(s))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Value::Tag(_))
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Value::Section(_))
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Value::Document(_))
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "Text",
            Value::Tag(_) => "Tag",
            Value::Section(_) => "Section",
            Value::Document(_) => "Document",
        }
    }

    /// §3's coercion table, `Text` column: identity for `Text`; fails for
    /// `Tag`; concatenation of every item's `toText` for `Section`/
    /// `Document` (a `Document` coerces exactly like the `Section` it
    /// wraps, mirroring the Python `Document(Section)` inheritance).
    pub fn to_text(&self) -> Result<Text, ConversionError> {
        match self {
            Value::Text(t) => Ok(t.clone()),
            Value::Tag(_) => Err(ConversionError::new("Tag", "Text")),
            Value::Section(s) => {
                let mut out = String::new();
                for item in &s.0 {
                    out.push_str(item.to_text()?.as_str());
                }
                Ok(Text::new(out))
            }
            Value::Document(d) => {
                let mut out = String::new();
                for item in &d.items {
                    out.push_str(item.to_text()?.as_str());
                }
                Ok(Text::new(out))
            }
        }
    }

    /// §3's coercion table, `Tag` column: identity for `Tag`; fails for
    /// everything else.
    pub fn to_tag(&self) -> Result<&Tag, ConversionError> {
        match self {
            Value::Tag(t) => Ok(t),
            other => Err(ConversionError::new(other.variant_name(), "Tag")),
        }
    }

    /// §3's coercion table, `Section` column: a `Text` becomes a singleton
    /// section; `Section`/`Document` are identity (dropping `Document`'s
    /// `src`); `Tag` fails.
    pub fn to_section(&self) -> Result<Section, ConversionError> {
        match self {
            Value::Text(_) => Ok(Section::new(vec![self.clone()])),
            Value::Tag(_) => Err(ConversionError::new("Tag", "Section")),
            Value::Section(s) => Ok(s.clone()),
            Value::Document(d) => Ok(Section::new(d.items.clone())),
        }
    }

    /// §3's coercion table, `Number` column: parses `Text` by the `NUMBER`
    /// grammar; `Section`/`Document` go through `toText` first; `Tag`
    /// fails outright.
    pub fn to_number(&self) -> Result<Number, ConversionError> {
        match self {
            Value::Text(t) => {
                lex::parse_number(&t.0).ok_or_else(|| ConversionError::new("Text", "Number"))
            }
            Value::Tag(_) => Err(ConversionError::new("Tag", "Number")),
            Value::Section(_) | Value::Document(_) => {
                let text = self.to_text()?;
                lex::parse_number(text.as_str())
                    .ok_or_else(|| ConversionError::new(self.variant_name(), "Number"))
            }
        }
    }
}
