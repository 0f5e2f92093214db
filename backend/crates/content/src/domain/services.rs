//! Domain Services
//!
//! Related-content scoring. Pure functions, no I/O.

use std::collections::HashSet;

use crate::domain::entities::Post;

/// Default number of related posts
pub const DEFAULT_MAX_RELATED: usize = 3;

const SAME_CATEGORY_SCORE: u32 = 3;
const SHARED_TAG_SCORE: u32 = 2;

/// Candidate paired with its relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredPost<'a> {
    pub post: &'a Post,
    pub score: u32,
}

/// Relevance of `candidate` to `current`
///
/// 3 for the same category, plus 2 for each distinct candidate tag that
/// `current` also carries.
pub fn relevance_score(candidate: &Post, current: &Post) -> u32 {
    let mut score = 0;

    if candidate.category == current.category {
        score += SAME_CATEGORY_SCORE;
    }

    let current_tags: HashSet<&str> = current.tags.iter().map(String::as_str).collect();
    let shared = candidate
        .tags
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .intersection(&current_tags)
        .count() as u32;

    score + shared * SHARED_TAG_SCORE
}

/// Top `max_results` posts from `pool` related to `current`
///
/// Skips `current` itself (by slug) and anything scoring 0. Ordered by score,
/// then newest first; full ties keep pool order.
pub fn select_related<'a>(current: &Post, pool: &'a [Post], max_results: usize) -> Vec<ScoredPost<'a>> {
    let mut scored: Vec<ScoredPost<'a>> = pool
        .iter()
        .filter(|post| post.slug != current.slug)
        .map(|post| ScoredPost {
            post,
            score: relevance_score(post, current),
        })
        .filter(|candidate| candidate.score > 0)
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.post.date.cmp(&a.post.date))
    });
    scored.truncate(max_results);

    scored
}
