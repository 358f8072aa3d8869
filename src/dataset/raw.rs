//! Raw dataset shapes as they appear in JSON.
//!
//! Counts and ranks are signed and strings are free-form; the loader
//! turns these into typed records.

use serde::{Deserialize, Serialize};

/// A count as written in the dataset: a number, or a marker string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMetric {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPlatform {
    #[serde(default)]
    pub sno: Option<i64>,
    pub name: String,
    pub status: String,
    pub committed: RawMetric,
    pub drafted: RawMetric,
    pub published: RawMetric,
    #[serde(default)]
    pub content_plan: String,
    #[serde(default)]
    pub platform_link: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub primary_content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHashtag {
    pub tag: String,
    pub category: String,
    #[serde(default)]
    pub usage_context: String,
    #[serde(default)]
    pub platform_suitability: String,
    pub popularity_score: i64,
    #[serde(default)]
    pub best_posting_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCompetitor {
    pub rank: i64,
    pub name: String,
    #[serde(default)]
    pub website: String,
}

/// Top-level dataset document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDataset {
    #[serde(default)]
    pub platforms: Vec<RawPlatform>,
    #[serde(default)]
    pub hashtags: Vec<RawHashtag>,
    #[serde(default)]
    pub competitors: Vec<RawCompetitor>,
}
