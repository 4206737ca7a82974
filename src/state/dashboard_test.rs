use super::*;

fn post(id: &str, category: &str, created_at: &str, likes: usize) -> Post {
    Post {
        id: id.to_owned(),
        title: format!("Post {id}"),
        category: category.to_owned(),
        content: String::new(),
        created_by: "u-1".to_owned(),
        created_at: created_at.to_owned(),
        likes: (0..likes).map(|i| format!("u-{i}")).collect(),
        comments: Vec::new(),
    }
}

fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_owned(),
        name: name.to_owned(),
    }
}

// =============================================================
// posts_per_category
// =============================================================

#[test]
fn counts_posts_per_category_in_category_order() {
    let categories = vec![category("c-1", "Tech"), category("c-2", "Life")];
    let posts = vec![
        post("p-1", "Tech", "2024-05-01T10:00:00.000Z", 0),
        post("p-2", "Tech", "2024-05-02T10:00:00.000Z", 0),
        post("p-3", "Life", "2024-05-02T11:00:00.000Z", 0),
    ];
    assert_eq!(
        posts_per_category(&categories, &posts),
        vec![("Tech".to_owned(), 2), ("Life".to_owned(), 1)]
    );
}

#[test]
fn empty_category_counts_zero() {
    let categories = vec![category("c-1", "Travel")];
    assert_eq!(
        posts_per_category(&categories, &[]),
        vec![("Travel".to_owned(), 0)]
    );
}

// =============================================================
// posts_over_time
// =============================================================

#[test]
fn groups_posts_by_day_ascending() {
    let posts = vec![
        post("p-1", "Tech", "2024-05-02T10:00:00.000Z", 0),
        post("p-2", "Tech", "2024-05-01T09:00:00.000Z", 0),
        post("p-3", "Tech", "2024-05-02T23:59:00.000Z", 0),
    ];
    assert_eq!(
        posts_over_time(&posts),
        vec![("2024-05-01".to_owned(), 1), ("2024-05-02".to_owned(), 2)]
    );
}

#[test]
fn short_timestamp_is_its_own_bucket() {
    let posts = vec![post("p-1", "Tech", "bad", 0)];
    assert_eq!(posts_over_time(&posts), vec![("bad".to_owned(), 1)]);
}

// =============================================================
// likes_per_post / max_count
// =============================================================

#[test]
fn likes_per_post_pairs_title_with_count() {
    let posts = vec![
        post("p-1", "Tech", "2024-05-01T10:00:00.000Z", 3),
        post("p-2", "Tech", "2024-05-01T11:00:00.000Z", 0),
    ];
    assert_eq!(
        likes_per_post(&posts),
        vec![("Post p-1".to_owned(), 3), ("Post p-2".to_owned(), 0)]
    );
}

#[test]
fn max_count_never_zero() {
    assert_eq!(max_count(&[]), 1);
    assert_eq!(max_count(&[("a".to_owned(), 0)]), 1);
    assert_eq!(max_count(&[("a".to_owned(), 4), ("b".to_owned(), 7)]), 7);
}
