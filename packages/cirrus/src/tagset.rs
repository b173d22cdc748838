//! The `cirrus` tagset: the seven tags the HTML visitor understands,
//! grounded directly on `examples/original_source/cirrus.py`'s module-level
//! `cirrus = snow.TagSet({...})` declaration.

use snow::{Attribute, TagDef, TagSet, Value};

/// Builds the tagset `cirrus::render` expects its input document to have
/// been parsed against.
pub fn cirrus_tagset() -> TagSet {
    TagSet::new()
        .with(
            "doc",
            TagDef::new(vec![
                Attribute::with_default("title", Value::text("Cirrus")),
                Attribute::new("..."),
            ]),
        )
        .with("bold", TagDef::new(vec![Attribute::new("...")]))
        .with("italic", TagDef::new(vec![Attribute::new("...")]))
        .with("underline", TagDef::new(vec![Attribute::new("...")]))
        .with(
            "link",
            TagDef::new(vec![
                Attribute::with_default("url", Value::text("")),
                Attribute::new("..."),
            ]),
        )
        .with("line", TagDef::default())
        .with(
            "image",
            TagDef::new(vec![Attribute::with_default("url", Value::text(""))]),
        )
}
