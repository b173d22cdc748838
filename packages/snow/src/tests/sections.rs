use super::*;

#[test]
fn section_value_interleaves_text_and_tags() {
    // §8 scenario (h)
    let tagset = TagSet::new()
        .with("x", TagDef::default())
        .with("wrap", TagDef::new(vec![Attribute::new("...")]));
    let doc = loads(&tagset, "{wrap [pre {x} post]}").unwrap();
    let Value::Tag(tag) = &doc.items[0] else {
        panic!("expected a tag")
    };
    match tag.get("...") {
        Some(Value::Section(section)) => {
            assert_eq!(section.len(), 3);
            assert_eq!(section.0[0], Value::text("pre "));
            match &section.0[1] {
                Value::Tag(t) => assert_eq!(t.name.as_str(), "x"),
                other => panic!("expected tag, got {other:?}"),
            }
            assert_eq!(section.0[2], Value::text(" post"));
        }
        other => panic!("expected a section, got {other:?}"),
    }
}

#[test]
fn plain_section_round_trips_through_to_section() {
    // §8 invariant 5
    let v = Value::text("x");
    assert_eq!(
        Value::Section(Section::new(vec![v.clone()])).to_section(),
        Ok(Section::new(vec![v]))
    );
}

#[test]
fn suppressed_tag_is_dropped_from_enclosing_document() {
    // §8 scenario (e)
    let tagset = TagSet::new().suppress("!");
    let doc = loads(&tagset, "before {! anything } after").unwrap();
    assert_eq!(
        doc.items,
        vec![Value::text("before "), Value::text(" after")]
    );
}

#[test]
fn suppressed_tag_is_dropped_from_enclosing_section() {
    // A `[...]` is only ever parsed as a `value` inside a tag's argument
    // list (§4.D grammar) - never directly at the document's top level.
    let tagset = TagSet::new().suppress("!");
    let doc = loads(&tagset, "{b [before {! anything } after]}").unwrap();
    let Value::Tag(tag) = &doc.items[0] else {
        panic!("expected a tag")
    };
    let Value::Section(section) = &tag.extra[0] else {
        panic!("expected a section")
    };
    assert_eq!(
        section.0,
        vec![Value::text("before "), Value::text(" after")]
    );
}

#[test]
fn escaped_brace_and_bracket_collapse_inside_sections() {
    let doc = loads(&TagSet::new(), r"{b [a \{ b \] c]}").unwrap();
    let Value::Tag(tag) = &doc.items[0] else {
        panic!("expected a tag")
    };
    let Value::Section(section) = &tag.extra[0] else {
        panic!("expected a section")
    };
    assert_eq!(section.0, vec![Value::text("a { b ] c")]);
}
