use super::*;

#[test]
fn snippet_strips_tags() {
    assert_eq!(snippet("<p>Hello <b>world</b></p>", 50), "Hello world");
}

#[test]
fn snippet_truncates_with_ellipsis() {
    assert_eq!(snippet("abcdef", 3), "abc\u{2026}");
}

#[test]
fn snippet_plain_text_passthrough() {
    assert_eq!(snippet("plain", 10), "plain");
    assert_eq!(snippet("", 10), "");
}

#[test]
fn snippet_unclosed_tag_drops_rest() {
    assert_eq!(snippet("ok <img src=", 10), "ok ");
}
