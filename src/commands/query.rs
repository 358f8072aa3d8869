//! Read-only listing commands.

use super::models::{HashtagQuery, PlatformQuery};
use crate::dataset::{Hashtag, Platform};
use crate::store::Dashboard;
use crate::view::{render_hashtags, render_platforms};
use log::debug;

/// Apply platform filters
///
/// **Public** - record order is kept unless `potential` asks for ranking
pub fn select_platforms<'a>(dashboard: &'a Dashboard, query: &PlatformQuery) -> Vec<&'a Platform> {
    let mut selected = match (query.potential, query.status) {
        (true, _) => dashboard.inactive_platforms_with_potential(),
        (false, Some(status)) => dashboard.platforms_by_status(status),
        (false, None) => dashboard.platforms().iter().collect(),
    };

    if let Some(status) = query.status {
        selected.retain(|p| p.status == status);
    }

    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        selected.retain(|p| p.matches_query(&needle));
    }

    debug!("Selected {} platforms for {:?}", selected.len(), query);
    selected
}

/// Apply hashtag filters
pub fn select_hashtags<'a>(dashboard: &'a Dashboard, query: &HashtagQuery) -> Vec<&'a Hashtag> {
    let mut selected: Vec<&Hashtag> = match query.top {
        Some(limit) => dashboard.top_hashtags(limit).iter().collect(),
        None => dashboard.hashtags().iter().collect(),
    };

    // The top list is a ranked copy, so filter by content rather than
    // intersecting with the record-backed queries
    if let Some(category) = &query.category {
        let needle = category.to_lowercase();
        selected.retain(|h| h.matches_category(&needle));
    }

    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        selected.retain(|h| h.matches_query(&needle));
    }

    debug!("Selected {} hashtags for {:?}", selected.len(), query);
    selected
}

pub fn platforms_output(dashboard: &Dashboard, query: &PlatformQuery) -> String {
    render_platforms(select_platforms(dashboard, query))
}

pub fn hashtags_output(dashboard: &Dashboard, query: &HashtagQuery) -> String {
    render_hashtags(select_hashtags(dashboard, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{BuiltinData, PlatformStatus};
    use crate::utils::config::DashboardConfig;

    fn builtin() -> Dashboard {
        Dashboard::from_source(&BuiltinData, DashboardConfig::default()).unwrap()
    }

    #[test]
    fn test_select_platforms_by_status_and_search() {
        let dashboard = builtin();
        let query = PlatformQuery {
            status: Some(PlatformStatus::NotActive),
            search: Some("video".to_string()),
            potential: false,
        };

        let names: Vec<&str> = select_platforms(&dashboard, &query)
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(names, vec!["YouTube", "Tiktok"]);
    }

    #[test]
    fn test_select_platforms_potential_keeps_ranking() {
        let dashboard = builtin();
        let query = PlatformQuery {
            potential: true,
            ..Default::default()
        };

        let selected = select_platforms(&dashboard, &query);
        assert_eq!(selected[0].name, "Google Business");
        assert_eq!(selected.len(), 6);
    }

    #[test]
    fn test_select_hashtags_top_within_category() {
        let dashboard = builtin();
        let query = HashtagQuery {
            top: Some(10),
            category: Some("personal".to_string()),
            search: None,
        };

        let tags: Vec<&str> = select_hashtags(&dashboard, &query)
            .iter()
            .map(|h| h.tag.as_str())
            .collect();

        assert_eq!(tags, vec!["#WeddingPlanning"]);
    }

    #[test]
    fn test_select_hashtags_top_with_search() {
        let dashboard = builtin();
        let query = HashtagQuery {
            top: Some(5),
            category: None,
            search: Some("EVENT".to_string()),
        };

        let tags: Vec<&str> = select_hashtags(&dashboard, &query)
            .iter()
            .map(|h| h.tag.as_str())
            .collect();

        assert_eq!(
            tags,
            vec![
                "#EventPlanning",
                "#WeddingPlanning",
                "#EventSuccess",
                "#ReddotEvents",
                "#EventDesign",
            ]
        );
    }

    #[test]
    fn test_select_hashtags_top_with_unmatched_category() {
        let dashboard = builtin();
        let query = HashtagQuery {
            top: Some(10),
            category: Some("technology".to_string()),
            search: None,
        };

        // #EventTech scores 7, below the top list threshold
        assert!(select_hashtags(&dashboard, &query).is_empty());
    }

    #[test]
    fn test_hashtags_output_counts_rows() {
        let dashboard = builtin();
        let output = hashtags_output(
            &dashboard,
            &HashtagQuery {
                search: Some("wedding".to_string()),
                ..Default::default()
            },
        );

        assert!(output.contains("#WeddingPlanning"));
        assert!(output.ends_with("1 hashtag(s)"));
    }
}
