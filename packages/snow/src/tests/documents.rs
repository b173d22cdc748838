use super::*;

#[test]
fn bare_text_document_is_a_single_text_item() {
    // §8 scenario (a)
    let doc = parse("hello");
    assert_eq!(doc.src, "<string>");
    assert_eq!(doc.items, vec![Value::text("hello")]);
}

#[test]
fn text_free_of_special_characters_round_trips_verbatim() {
    // §8 invariant 3
    for s in ["plain sentence", "numbers 123 and spaces", "emoji \u{1F600} too"] {
        let doc = parse(s);
        assert_eq!(doc.items, vec![Value::text(s)]);
    }
}

#[test]
fn empty_document_has_no_items() {
    let doc = parse("");
    assert!(doc.items.is_empty());
}

#[test]
fn loads_records_string_sentinel_source() {
    let doc = loads(&TagSet::new(), "anything").unwrap();
    assert_eq!(doc.src, "<string>");
}

#[test]
fn load_records_the_given_name() {
    let cursor = std::io::Cursor::new(b"hello".to_vec());
    let doc = load(&TagSet::new(), "notes.snow", cursor).unwrap().unwrap();
    assert_eq!(doc.src, "notes.snow");
    assert_eq!(doc.items, vec![Value::text("hello")]);
}

#[test]
fn text_interleaves_with_tags_at_the_document_level() {
    let tagset = TagSet::new().with("b", TagDef::default());
    let doc = parse_with(&tagset, "before {b} after");
    assert_eq!(doc.items.len(), 3);
    assert_eq!(doc.items[0], Value::text("before "));
    match &doc.items[1] {
        Value::Tag(tag) => {
            assert_eq!(tag.name.as_str(), "b");
            assert_eq!(tag.named().count(), 0);
            assert!(tag.extra.is_empty());
        }
        other => panic!("expected a tag, got {other:?}"),
    }
    assert_eq!(doc.items[2], Value::text(" after"));
}

#[test]
fn crlf_and_cr_newlines_normalize_to_lf() {
    let doc = parse("a\r\nb\rc\nd");
    assert_eq!(doc.items, vec![Value::text("a\nb\nc\nd")]);
}

#[test]
fn unknown_tag_accepts_all_positionals_into_extra() {
    // No declared TagDef at all: every positional spills into `extra`.
    let doc = parse("{mystery 1 2 3}");
    let Value::Tag(tag) = &doc.items[0] else {
        panic!("expected a tag")
    };
    assert_eq!(tag.name.as_str(), "mystery");
    assert!(tag.is_empty());
    assert_eq!(
        tag.extra,
        vec![Value::text("1"), Value::text("2"), Value::text("3")]
    );
}

fn parse_with(tagset: &TagSet, text: &str) -> Document {
    loads(tagset, text).unwrap()
}
