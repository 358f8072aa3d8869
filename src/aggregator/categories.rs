//! Per-category breakdowns of hashtags and platforms.
//!
//! Categories are kept in first-seen order so repeated computations
//! serialize identically.

use crate::dataset::{Hashtag, Platform, PlatformStatus};
use serde::{Deserialize, Serialize};

/// Hashtag count and popularity for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub count: usize,
    pub total_score: u32,

    /// Mean popularity rounded to one decimal
    pub avg_score: f64,
}

/// Platform rollup for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCategory {
    pub category: String,
    pub count: usize,
    pub active: usize,
    pub inactive: usize,
    pub total_committed: u64,
}

/// Group hashtags by category
///
/// **Public** - one entry per distinct category, first-seen order
pub fn calculate_category_breakdown(hashtags: &[Hashtag]) -> Vec<CategoryBreakdown> {
    let mut breakdown: Vec<CategoryBreakdown> = Vec::new();

    for hashtag in hashtags {
        let index = match breakdown.iter().position(|b| b.category == hashtag.category) {
            Some(index) => index,
            None => {
                breakdown.push(CategoryBreakdown {
                    category: hashtag.category.clone(),
                    count: 0,
                    total_score: 0,
                    avg_score: 0.0,
                });
                breakdown.len() - 1
            }
        };

        let entry = &mut breakdown[index];
        entry.count += 1;
        entry.total_score += u32::from(hashtag.popularity_score);
    }

    for entry in &mut breakdown {
        entry.avg_score = round_to_tenth(entry.total_score as f64 / entry.count as f64);
    }

    breakdown
}

/// Group platforms by category
///
/// **Public** - platforms with an empty category are skipped
pub fn calculate_platform_categories(platforms: &[Platform]) -> Vec<PlatformCategory> {
    let mut categories: Vec<PlatformCategory> = Vec::new();

    for platform in platforms.iter().filter(|p| !p.category.is_empty()) {
        let index = match categories.iter().position(|c| c.category == platform.category) {
            Some(index) => index,
            None => {
                categories.push(PlatformCategory {
                    category: platform.category.clone(),
                    count: 0,
                    active: 0,
                    inactive: 0,
                    total_committed: 0,
                });
                categories.len() - 1
            }
        };

        let entry = &mut categories[index];
        entry.count += 1;
        match platform.status {
            PlatformStatus::Active => entry.active += 1,
            PlatformStatus::NotActive => entry.inactive += 1,
            PlatformStatus::AlreadyInPlace => {}
        }
        if let Some(committed) = platform.committed.count() {
            entry.total_committed += u64::from(committed);
        }
    }

    categories
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
