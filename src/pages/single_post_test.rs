use super::*;

// =============================================================
// Like / comment list building
// =============================================================

#[test]
fn with_like_appends_user_id() {
    let likes = with_like(vec!["u-1".to_owned()], "u-2");
    assert_eq!(likes, vec!["u-1".to_owned(), "u-2".to_owned()]);
}

#[test]
fn with_like_on_empty_list() {
    assert_eq!(with_like(Vec::new(), "u-1"), vec!["u-1".to_owned()]);
}

#[test]
fn with_comment_appends_trimmed_text() {
    let comments = with_comment(vec!["first".to_owned()], "  second  ");
    assert_eq!(
        comments,
        Some(vec!["first".to_owned(), "second".to_owned()])
    );
}

#[test]
fn with_comment_rejects_blank_input() {
    assert_eq!(with_comment(vec!["first".to_owned()], ""), None);
    assert_eq!(with_comment(Vec::new(), "   "), None);
}
