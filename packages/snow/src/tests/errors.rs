use super::*;

#[test]
fn unterminated_string_reports_missing_terminator() {
    // §8 scenario (f). A bare leading quote at the document's top level
    // isn't in value position - `doc_text`'s stop predicate only breaks
    // on `{`, so it's consumed as plain text. The diagnostic only fires
    // once the quote is read as a string value, i.e. inside a tag.
    let err = loads(&TagSet::new(), r#"{b "unterminated}"#).unwrap_err();
    assert_eq!(err.line, 1);
    assert!(err.message.contains("Missing terminating \" character"));
}

#[test]
fn unterminated_single_quote_names_its_own_delimiter() {
    let err = loads(&TagSet::new(), "{b 'oops}").unwrap_err();
    assert!(err.message.contains("Missing terminating ' character"));
}

#[test]
fn dangling_colon_reports_forgot_to_assign() {
    // §8 scenario (g)
    let err = loads(&TagSet::new(), "{a :}").unwrap_err();
    assert_eq!(
        err.message,
        "Forgot to assign a value to the named attribute."
    );
    assert_eq!((err.line, err.col), (1, 4));
}

#[test]
fn unexpected_close_bracket_names_the_missing_close_brace() {
    let err = loads(&TagSet::new(), "{a ]}").unwrap_err();
    assert_eq!(
        err.message,
        "Unexpected close bracket ]. Did you forget to close a tag?"
    );
}

#[test]
fn control_character_in_unquoted_text_is_rejected() {
    let err = loads(&TagSet::new(), "{a \u{0007}}").unwrap_err();
    assert_eq!(
        err.message,
        "Control characters are disallowed in unquoted text."
    );
}

#[test]
fn end_of_input_mid_tag_reports_eof() {
    let err = loads(&TagSet::new(), "{a").unwrap_err();
    assert_eq!(
        err.message,
        "Reached end of string/file while parsing a tag."
    );
}

#[test]
fn parse_error_display_matches_the_documented_format() {
    let err = ParseError::new("boom", 3, 7);
    assert_eq!(err.to_string(), "boom (ln: 3 col: 7)");
}

#[test]
fn named_attribute_keys_must_be_text_not_tags() {
    let tagset = TagSet::new().with("x", TagDef::default());
    let err = loads(&tagset, "{a {x}:1}").unwrap_err();
    assert_eq!(err.message, "Named attribute keys must be text.");
}
