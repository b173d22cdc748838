//! The visitor surface (§4.E): a single-method double dispatch over
//! [`Value`], mirroring the accept/visit pattern `cirrus.py`'s
//! `HTMLVisitor` uses, expressed as pattern matching rather than runtime
//! method lookup.

use crate::value::Value;

/// Implemented by anything that wants to walk a parsed document. `accept`
/// is called once per [`Value`] encountered; descending into a `Section`'s
/// items, a `Document`'s items, or a `Tag`'s attribute values is entirely
/// the acceptor's own responsibility - it calls [`Value::visit`] again on
/// whatever children it wants to descend into (§4.E: "the acceptor
/// inspects the variant ... and recurses").
pub trait Visit {
    fn accept(&mut self, value: &Value);
}

impl Value {
    /// Dispatches `self` to `target.accept` once. Recursion into children
    /// is not automatic - see [`Visit`].
    pub fn visit(&self, target: &mut dyn Visit) {
        target.accept(self);
    }
}
