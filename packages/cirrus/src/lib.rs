//! The Cirrus profile: a `snow::TagSet` for a small set of HTML-shaped
//! tags, plus the tree-walking visitor that renders a document parsed
//! against it to a serialized `<html>` string.
//!
//! This is the collaborator §6.3 and §4.E pin the `snow` visitor contract
//! against - it exercises `Visit`, the `isTag`/`isText`/.../`toText`
//! surface, and the `"..."` body-slot convention from the consumer side.

mod html;
mod tagset;

#[cfg(test)]
mod tests;

pub use html::{render, Element, HtmlVisitor, Node, RenderError};
pub use tagset::cirrus_tagset;
