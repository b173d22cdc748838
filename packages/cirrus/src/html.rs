//! The HTML translator: walks a parsed `cirrus`-tagset `Document` and
//! produces a serialized `<html>` string.
//!
//! Grounded on `examples/original_source/cirrus.py`'s `HTMLVisitor`/
//! `Element`/`TextElement`/`indent`/`solidify`. The mutable
//! `self.cur`/`x.parent` tree Python builds (an `Element` can always walk
//! back up to find out whether it's nested) becomes a plain `Vec<Element>`
//! stack here: descending into a tag's body pushes a fresh `Element`,
//! finishing that tag's `accept` call pops it and appends it to whatever's
//! now on top. `stack.len() > 1` is exactly "`self.cur.parent is not
//! None`" - both say "we're nested inside at least one wrapper".
//!
//! `HtmlVisitor::accept` can't return a `Result` (the `Visit` trait's
//! signature doesn't have one), so a translation failure is recorded in
//! `error` and further `accept` calls become no-ops; `render` surfaces it
//! at the end.

use indexmap::IndexMap;
use snow::{ConversionError, Document, Tag, Value, Visit};
use thiserror::Error;

/// A translation failure (distinct from `snow::ParseError`: the document
/// parsed fine, but the tree doesn't satisfy what the HTML visitor
/// requires of it).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("the document has no readable content")]
    EmptyDocument,
    #[error("a doc tag should only be at the root of the document")]
    MisplacedDoc,
    #[error("tag attribute could not be read as text: {0}")]
    InvalidAttribute(#[from] ConversionError),
}

/// A leaf of the output tree: either an element with children/attributes,
/// or a run of literal text (`TextElement` in the original).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    fn render(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element(el) => el.render(),
        }
    }
}

/// An HTML element under construction: a name, its attributes in
/// insertion order, its children, whether it renders as a self-closing
/// tag when empty (`atomic`), and whether its children are laid out one
/// per line (`space`).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<Node>,
    pub atomic: bool,
    pub space: bool,
}

impl Element {
    pub fn new(name: impl Into<String>, atomic: bool) -> Self {
        Self {
            name: name.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            atomic,
            space: false,
        }
    }

    pub fn with_attrs(name: impl Into<String>, atomic: bool, attrs: IndexMap<String, String>) -> Self {
        Self {
            name: name.into(),
            attrs,
            children: Vec::new(),
            atomic,
            space: false,
        }
    }

    fn spaced(name: impl Into<String>) -> Self {
        Self {
            space: true,
            ..Self::new(name, true)
        }
    }

    /// Serializes this element and its children, matching `cirrus.py`'s
    /// `Element.solidify`.
    pub fn render(&self) -> String {
        let mut attrs = self
            .attrs
            .iter()
            .map(|(k, v)| format!("{k}=\"{v}\""))
            .collect::<Vec<_>>()
            .join(" ");
        if !attrs.is_empty() {
            attrs = format!(" {attrs}");
        }

        if !self.children.is_empty() {
            let parts: Vec<String> = self
                .children
                .iter()
                .map(Node::render)
                .filter(|c| c != " ")
                .collect();
            if self.space {
                format!(
                    "<{0}{1}>\n{2}\n</{0}>",
                    self.name,
                    attrs,
                    indent(&parts.join("\n"))
                )
            } else {
                format!("<{0}{1}>{2}</{0}>", self.name, attrs, parts.join(" "))
            }
        } else if self.atomic {
            format!("<{}{}/>", self.name, attrs)
        } else {
            format!("<{0}{1}></{0}>", self.name, attrs)
        }
    }
}

/// Prefixes `text` and every line following a newline inside it with a
/// tab, matching `cirrus.py`'s `indent`.
fn indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    out.push('\t');
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
            out.push('\t');
        } else if c == '\n' {
            out.push('\n');
            out.push('\t');
        } else {
            out.push(c);
        }
    }
    out
}

/// Walks a `cirrus`-tagset document, building a `<head>`/`<body>` element
/// tree.
pub struct HtmlVisitor {
    head: Element,
    stack: Vec<Element>,
    error: Option<RenderError>,
}

impl HtmlVisitor {
    pub fn new() -> Self {
        Self {
            head: Element::spaced("head"),
            stack: vec![Element::spaced("body")],
            error: None,
        }
    }

    fn append_child(&mut self, node: Node) {
        if let Some(top) = self.stack.last_mut() {
            top.children.push(node);
        }
    }

    /// Reads `key` off `tag` and coerces it to text, recording a
    /// `RenderError` and returning `None` if the attribute is present but
    /// isn't text-shaped.
    fn text_attr(&mut self, tag: &Tag, key: &str) -> Option<String> {
        let value = tag.get(key)?;
        match value.to_text() {
            Ok(text) => Some(text.into_string()),
            Err(e) => {
                self.error = Some(RenderError::InvalidAttribute(e));
                None
            }
        }
    }

    fn wrap_body(&mut self, html_name: &str, attrs: IndexMap<String, String>, tag: &Tag) {
        self.stack.push(Element::with_attrs(html_name, true, attrs));
        if let Some(body) = tag.get("...") {
            body.visit(self);
        }
        if let Some(el) = self.stack.pop() {
            self.append_child(Node::Element(el));
        }
    }

    fn accept_tag(&mut self, tag: &Tag) {
        match tag.name.as_str() {
            "doc" => {
                if let Some(title) = self.text_attr(tag, "title") {
                    let mut title_el = Element::new("title", false);
                    title_el.children.push(Node::Text(title));
                    self.head.children.push(Node::Element(title_el));
                }
                if self.error.is_some() {
                    return;
                }
                if self.stack.len() > 1 {
                    self.error = Some(RenderError::MisplacedDoc);
                    return;
                }
                if let Some(body) = tag.get("...") {
                    body.visit(self);
                }
            }
            "bold" => self.wrap_body("b", IndexMap::new(), tag),
            "italic" => self.wrap_body("i", IndexMap::new(), tag),
            "underline" => self.wrap_body("u", IndexMap::new(), tag),
            "link" => {
                let url = self.text_attr(tag, "url").unwrap_or_default();
                if self.error.is_some() {
                    return;
                }
                let mut attrs = IndexMap::new();
                attrs.insert("href".to_string(), url);
                self.wrap_body("a", attrs, tag);
            }
            "line" => {
                self.append_child(Node::Element(Element::new("br", true)));
                self.append_child(Node::Text(String::new()));
            }
            "image" => {
                let url = self.text_attr(tag, "url").unwrap_or_default();
                if self.error.is_some() {
                    return;
                }
                let mut attrs = IndexMap::new();
                attrs.insert("src".to_string(), url);
                self.append_child(Node::Element(Element::with_attrs("img", true, attrs)));
            }
            other => {
                log::warn!("unexpected tag {other:?}");
                self.append_child(Node::Element(Element::new("div", true)));
            }
        }
    }

    fn render(self) -> String {
        format!(
            "<html>\n{}\n{}\n</html>",
            indent(&self.head.render()),
            indent(&self.stack[0].render())
        )
    }
}

impl Default for HtmlVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visit for HtmlVisitor {
    fn accept(&mut self, value: &Value) {
        if self.error.is_some() {
            return;
        }
        match value {
            Value::Tag(tag) => self.accept_tag(tag),
            Value::Section(section) => {
                for item in section.iter() {
                    item.visit(self);
                }
            }
            Value::Text(text) => self.append_child(Node::Text(text.as_str().to_string())),
            Value::Document(_) => {
                unreachable!("a Document is never nested inside another value")
            }
        }
    }
}

/// Translates `document` (parsed against [`crate::cirrus_tagset`]) to a
/// serialized HTML string, visiting only the first top-level tag
/// (`cirrus.py`'s "only visit the first element").
pub fn render(document: &Document) -> Result<String, RenderError> {
    let mut visitor = HtmlVisitor::new();
    match document.iter().find(|v| v.is_tag()) {
        Some(root) => root.visit(&mut visitor),
        None => return Err(RenderError::EmptyDocument),
    }
    if let Some(err) = visitor.error.take() {
        return Err(err);
    }
    Ok(visitor.render())
}
