//! Pure aggregations behind the dashboard charts.
//!
//! The dashboard fetches the raw collections and reduces them here;
//! rendering is plain markup on top of these pairs.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::BTreeMap;

use crate::net::types::{Category, Post};

/// Post count per category, in the order the categories collection lists
/// them. Categories with no posts count zero.
pub fn posts_per_category(categories: &[Category], posts: &[Post]) -> Vec<(String, usize)> {
    categories
        .iter()
        .map(|cat| {
            let count = posts.iter().filter(|p| p.category == cat.name).count();
            (cat.name.clone(), count)
        })
        .collect()
}

/// Posts grouped by calendar day of `createdAt`, ascending.
///
/// The timestamps are ISO-8601, so the day is the first ten characters
/// and lexicographic order is chronological order.
pub fn posts_over_time(posts: &[Post]) -> Vec<(String, usize)> {
    let mut grouped: BTreeMap<String, usize> = BTreeMap::new();
    for post in posts {
        let day = post.created_at.get(..10).unwrap_or(&post.created_at);
        *grouped.entry(day.to_owned()).or_default() += 1;
    }
    grouped.into_iter().collect()
}

/// Like count per post, in post order.
pub fn likes_per_post(posts: &[Post]) -> Vec<(String, usize)> {
    posts
        .iter()
        .map(|p| (p.title.clone(), p.likes.len()))
        .collect()
}

/// Largest count in a series, for scaling chart bars. At least one to
/// keep width math away from dividing by zero.
pub fn max_count(series: &[(String, usize)]) -> usize {
    series.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1)
}
