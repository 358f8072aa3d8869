//! Score and commitment rankings.
//!
//! All sorts here are stable: ties keep their original record order.

use crate::dataset::{Hashtag, Platform};
use log::debug;

/// Hashtags scoring at least `min_score`, highest first
///
/// **Public** - ties keep insertion order
pub fn rank_hashtags(hashtags: &[Hashtag], min_score: u8) -> Vec<Hashtag> {
    let mut ranked: Vec<Hashtag> = hashtags
        .iter()
        .filter(|h| h.popularity_score >= min_score)
        .cloned()
        .collect();

    ranked.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));

    debug!("{} hashtags score {} or higher", ranked.len(), min_score);
    ranked
}

/// Sort platforms by committed content, highest first
///
/// **Public** - not-applicable counts rank as zero
pub fn sort_by_committed<'a>(platforms: impl IntoIterator<Item = &'a Platform>) -> Vec<&'a Platform> {
    let mut sorted: Vec<&Platform> = platforms.into_iter().collect();
    sorted.sort_by(|a, b| b.committed.or_zero().cmp(&a.committed.or_zero()));
    sorted
}
