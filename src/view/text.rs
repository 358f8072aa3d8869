//! Plain-text tables for terminal output.

use super::builder::{header_metrics, metrics_summary, posting_schedule, presence_score, priority_platforms};
use crate::dataset::{Competitor, Hashtag, Platform};
use crate::store::Dashboard;

const RULE_WIDTH: usize = 80;

/// Multi-section summary of the whole dashboard
pub fn render_summary(dashboard: &Dashboard, top_hashtags: usize) -> String {
    let header = header_metrics(dashboard);
    let stats = dashboard.platform_stats();
    let summary = metrics_summary(dashboard);
    let presence = presence_score(dashboard);
    let mut lines = Vec::new();

    lines.push("=".repeat(RULE_WIDTH));
    lines.push("REDDOT EVENTS CONTENT STRATEGY".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!("Platforms:        {}", header.total_platforms));
    lines.push(format!(
        "  Active: {} | Inactive: {} | Already in Place: {}",
        stats.active, stats.inactive, stats.already_in_place
    ));
    lines.push(format!("Presence Score:   {}%", presence.score));
    lines.push(format!("Committed:        {}", header.total_committed));
    lines.push(format!("Drafted:          {}", header.total_drafted));
    lines.push(format!("Completion Rate:  {}%", summary.content.completion_rate));
    lines.push(format!("Competitors:      {}", presence.tracked_competitors));

    lines.push(String::new());
    lines.push("Top Platforms".to_string());
    for entry in &summary.top_platforms {
        lines.push(format!(
            "  {:<28} {:>5}C {:>5}D {:>4}%",
            truncate(&entry.platform, 28),
            entry.committed,
            entry.drafted,
            entry.progress
        ));
    }

    lines.push(String::new());
    lines.push("Priority Platforms".to_string());
    for opportunity in priority_platforms(dashboard) {
        lines.push(format!(
            "  {:<28} {:>5} committed  ({})",
            truncate(&opportunity.platform, 28),
            opportunity.committed,
            opportunity.category
        ));
    }

    lines.push(String::new());
    lines.push("Posting Schedule".to_string());
    for slot in posting_schedule(dashboard) {
        lines.push(format!(
            "  {:<16} {} hashtags",
            slot.window.label(),
            slot.hashtags.len()
        ));
    }

    lines.push(String::new());
    lines.push(render_hashtags(dashboard.top_hashtags(top_hashtags)));
    lines.push("=".repeat(RULE_WIDTH));

    lines.join("\n")
}

/// Table of platforms with their pipeline counts
pub fn render_platforms<'a>(platforms: impl IntoIterator<Item = &'a Platform>) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{:>3}  {:<24} {:<17} {:>9} {:>7} {:>9}  {}",
        "#", "Platform", "Status", "Committed", "Drafted", "Published", "Category"
    ));
    lines.push("-".repeat(RULE_WIDTH));

    let mut count = 0;
    for platform in platforms {
        let sno = platform
            .sno
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{:>3}  {:<24} {:<17} {:>9} {:>7} {:>9}  {}",
            sno,
            truncate(&platform.name, 24),
            platform.status.label(),
            platform.committed.to_string(),
            platform.drafted.to_string(),
            platform.published.to_string(),
            platform.category
        ));
        count += 1;
    }

    lines.push(format!("{} platform(s)", count));
    lines.join("\n")
}

/// Table of hashtags with score and category
pub fn render_hashtags<'a>(hashtags: impl IntoIterator<Item = &'a Hashtag>) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{:<22} {:>5}  {:<20} {}",
        "Hashtag", "Score", "Category", "Best Time"
    ));
    lines.push("-".repeat(RULE_WIDTH));

    let mut count = 0;
    for hashtag in hashtags {
        lines.push(format!(
            "{:<22} {:>5}  {:<20} {}",
            truncate(&hashtag.tag, 22),
            hashtag.popularity_score,
            truncate(&hashtag.category, 20),
            hashtag.best_posting_time
        ));
        count += 1;
    }

    lines.push(format!("{} hashtag(s)", count));
    lines.join("\n")
}

pub fn render_competitors(competitors: &[Competitor]) -> String {
    competitors
        .iter()
        .map(|c| match &c.website {
            Some(url) => format!("#{:<3} {} ({})", c.rank, c.name, url),
            None => format!("#{:<3} {}", c.rank, c.name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Website Downloadable", 10), "Website...");
    }

    #[test]
    fn test_render_competitors() {
        let competitors = vec![
            Competitor {
                rank: 1,
                name: "Elite Events Co.".to_string(),
                website: None,
            },
            Competitor {
                rank: 2,
                name: "Premier".to_string(),
                website: Some("https://premier.example".to_string()),
            },
        ];

        let text = render_competitors(&competitors);
        assert_eq!(
            text,
            "#1   Elite Events Co.\n#2   Premier (https://premier.example)"
        );
    }
}
