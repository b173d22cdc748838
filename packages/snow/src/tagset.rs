//! Declarative tag schemas: `Attribute`, `TagDef`, `TagSet`, and the
//! attribute-resolution algorithm that turns parsed positional/named
//! arguments into a [`Tag`] (§3, §4.D step 1-2).

use crate::value::{Tag, Text, Value};
use indexmap::IndexMap;
use std::rc::Rc;

/// How a declared attribute's value is produced when the caller doesn't
/// supply one.
///
/// Named `AttrDefault` rather than `Default` to avoid shadowing
/// `std::default::Default` at the crate's public surface - the sentinel
/// meaning is identical to the "default producer" described in §3.
#[derive(Clone)]
pub enum AttrDefault {
    /// No default: if the caller doesn't supply this attribute, it's
    /// simply left unset (the sentinel "no default" from §3).
    None,
    /// A fixed value, independent of the rest of the tag.
    Const(Value),
    /// A function of the partially-built tag: every attribute already
    /// bound ahead of this one (by kwarg or by earlier positional binding)
    /// is visible; attributes not yet resolved are not present.
    Fn(Rc<dyn Fn(&Tag) -> Value>),
}

impl std::fmt::Debug for AttrDefault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrDefault::None => write!(f, "AttrDefault::None"),
            AttrDefault::Const(v) => write!(f, "AttrDefault::Const({v:?})"),
            AttrDefault::Fn(_) => write!(f, "AttrDefault::Fn(..)"),
        }
    }
}

impl AttrDefault {
    /// Produces the default for `partial`, or `None` if this attribute has
    /// no default producer at all.
    pub fn produce(&self, partial: &Tag) -> Option<Value> {
        match self {
            AttrDefault::None => None,
            AttrDefault::Const(v) => Some(v.clone()),
            AttrDefault::Fn(f) => Some(f(partial)),
        }
    }
}

/// A single declared attribute in a [`TagDef`]: a name and a default
/// producer. An attribute named `"..."` is the tag's body slot (§3): by
/// convention, documents bind it by writing the body as a bracketed
/// section positional argument, which the usual resolution algorithm then
/// binds to `"..."` like any other attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: Text,
    pub default: AttrDefault,
}

impl Attribute {
    /// An attribute with no default - the caller must supply it, or it's
    /// simply absent from the built tag.
    pub fn new(name: impl Into<Text>) -> Self {
        Self {
            name: name.into(),
            default: AttrDefault::None,
        }
    }

    /// An attribute that defaults to a fixed value.
    pub fn with_default(name: impl Into<Text>, default: Value) -> Self {
        Self {
            name: name.into(),
            default: AttrDefault::Const(default),
        }
    }

    /// An attribute whose default is computed from the rest of the tag.
    pub fn with_default_fn(name: impl Into<Text>, f: impl Fn(&Tag) -> Value + 'static) -> Self {
        Self {
            name: name.into(),
            default: AttrDefault::Fn(Rc::new(f)),
        }
    }
}

/// A declaration for one tag name: an ordered list of attributes, which
/// may be bound either positionally or by keyword.
#[derive(Debug, Clone, Default)]
pub struct TagDef {
    pub attrs: Vec<Attribute>,
}

impl TagDef {
    pub fn new(attrs: Vec<Attribute>) -> Self {
        Self { attrs }
    }

    /// Builds a `Tag` from the positional values (with the tag's own name
    /// already removed) and named values the parser collected, implementing
    /// §4.D's attribute-resolution algorithm exactly:
    ///
    /// 1. Split `named` into declared (bound immediately) and extra (held
    ///    aside).
    /// 2. Walk `positional` in order, binding each to the first
    ///    not-yet-bound declared attribute; once every declared attribute
    ///    is bound, remaining values spill into `extra`.
    /// 3. Fill defaults for every declared attribute still unbound.
    /// 4. Re-add the extra named attributes at the end.
    pub fn build(&self, name: Text, positional: Vec<Value>, named: IndexMap<Text, Value>) -> Tag {
        let mut tag = Tag::new(name);

        let mut extra_named = IndexMap::new();
        for (key, value) in named {
            if self.attrs.iter().any(|attr| attr.name == key) {
                tag.insert(key, value);
            } else {
                extra_named.insert(key, value);
            }
        }

        for value in positional {
            match self.attrs.iter().find(|attr| !tag.contains_key(&attr.name)) {
                Some(attr) => {
                    let name = attr.name.clone();
                    tag.insert(name, value);
                }
                None => tag.extra.push(value),
            }
        }

        for attr in &self.attrs {
            if !tag.contains_key(&attr.name) {
                if let Some(default) = attr.default.produce(&tag) {
                    tag.insert(attr.name.clone(), default);
                }
            }
        }

        for (key, value) in extra_named {
            tag.insert(key, value);
        }

        tag
    }
}

/// A mapping from tag name to its declaration, or the *suppress* sentinel
/// (`None`) for comment-like tags that should be dropped from the output
/// tree entirely (§3, §6.1's "Comments" - the canonical idiom is a tag
/// named `!`).
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    tags: IndexMap<Text, Option<TagDef>>,
}

impl TagSet {
    pub fn new() -> Self {
        Self {
            tags: IndexMap::new(),
        }
    }

    /// Declares `name` with the given definition.
    pub fn with(mut self, name: impl Into<Text>, def: TagDef) -> Self {
        self.tags.insert(name.into(), Some(def));
        self
    }

    /// Marks `name` as suppressed: tags with this name parse successfully
    /// but are dropped from their enclosing list.
    pub fn suppress(mut self, name: impl Into<Text>) -> Self {
        self.tags.insert(name.into(), None);
        self
    }

    /// Builds a tag from parsed positional/named arguments (§4.D step 1):
    /// `Some(tag)` for a declared or unknown name, `None` if `name` is
    /// bound to the suppress sentinel (the caller must drop this tag from
    /// its parent list). A name absent from the tagset is an "unknown
    /// tag": accepted with an empty `TagDef`, so every positional argument
    /// spills into `extra` and no defaults are injected.
    pub fn build_tag(
        &self,
        name: Text,
        positional: Vec<Value>,
        named: IndexMap<Text, Value>,
    ) -> Option<Tag> {
        match self.tags.get(&name) {
            Some(None) => None,
            Some(Some(def)) => Some(def.build(name, positional, named)),
            None => Some(TagDef::default().build(name, positional, named)),
        }
    }
}
