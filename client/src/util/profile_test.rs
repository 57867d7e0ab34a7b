use super::*;

#[test]
fn empty_first_name_renders_placeholder() {
    assert_eq!(display_or_placeholder(Some("")), "❌ Empty/None");
}

#[test]
fn missing_field_renders_placeholder() {
    assert_eq!(display_or_placeholder(None), EMPTY_PLACEHOLDER);
}

#[test]
fn present_field_renders_verbatim() {
    assert_eq!(display_or_placeholder(Some("Ada")), "Ada");
}

#[test]
fn whitespace_is_not_treated_as_empty() {
    assert_eq!(display_or_placeholder(Some(" ")), " ");
}

#[test]
fn field_len_counts_characters_not_bytes() {
    assert_eq!(field_len(Some("José")), 4);
    assert_eq!(field_len(Some("")), 0);
    assert_eq!(field_len(None), 0);
}
