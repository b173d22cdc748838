use super::*;
use indexmap::IndexMap;

#[test]
fn atomic_element_with_no_children_self_closes() {
    let el = Element::new("br", true);
    assert_eq!(el.render(), "<br/>");
}

#[test]
fn non_atomic_element_with_no_children_renders_open_close() {
    let el = Element::new("div", false);
    assert_eq!(el.render(), "<div></div>");
}

#[test]
fn attributes_render_in_insertion_order() {
    let mut attrs = IndexMap::new();
    attrs.insert("href".to_string(), "/a".to_string());
    attrs.insert("title".to_string(), "A".to_string());
    let el = Element::with_attrs("a", false, attrs);
    assert_eq!(el.render(), r#"<a href="/a" title="A"></a>"#);
}

#[test]
fn element_with_text_child_wraps_it_inline() {
    let mut el = Element::new("b", true);
    el.children.push(Node::Text("hi".to_string()));
    assert_eq!(el.render(), "<b>hi</b>");
}

#[test]
fn empty_document_fails_to_render() {
    let tagset = cirrus_tagset();
    let document = snow::loads(&tagset, "just text, no tags").unwrap();
    assert_eq!(render(&document), Err(RenderError::EmptyDocument));
}

#[test]
fn doc_not_at_root_is_rejected() {
    let tagset = cirrus_tagset();
    // Nesting a `doc` tag inside another tag's body puts it under a
    // non-empty visitor stack, which `HTMLVisitor::accept_tag` rejects.
    let document = snow::loads(&tagset, r#"{bold [{doc title:"x" [hi]}]}"#).unwrap();
    assert_eq!(render(&document), Err(RenderError::MisplacedDoc));
}
