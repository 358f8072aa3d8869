//! Typed record definitions.
//!
//! These are the shapes every query returns. They are only constructed
//! through validation, so a `Platform` always satisfies the metric rules.

use crate::utils::config::{NOT_APPLICABLE_SENTINEL, VIA_INSTAGRAM_MARKER};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Past activity status of a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformStatus {
    #[serde(rename = "Active")]
    Active,

    #[serde(rename = "Not Active")]
    NotActive,

    #[serde(rename = "Already in Place")]
    AlreadyInPlace,
}

impl PlatformStatus {
    /// Label as it appears in the dataset
    pub fn label(&self) -> &'static str {
        match self {
            PlatformStatus::Active => "Active",
            PlatformStatus::NotActive => "Not Active",
            PlatformStatus::AlreadyInPlace => "Already in Place",
        }
    }

    /// Parse a dataset label; `None` for anything unknown
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Active" => Some(PlatformStatus::Active),
            "Not Active" => Some(PlatformStatus::NotActive),
            "Already in Place" => Some(PlatformStatus::AlreadyInPlace),
            _ => None,
        }
    }
}

impl fmt::Display for PlatformStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A pipeline count, or the marker for rows where counts do not apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Count(u32),
    NotApplicable,
}

impl Metric {
    pub fn count(&self) -> Option<u32> {
        match self {
            Metric::Count(n) => Some(*n),
            Metric::NotApplicable => None,
        }
    }

    /// Count with the not-applicable marker read as zero
    pub fn or_zero(&self) -> u32 {
        self.count().unwrap_or(0)
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Metric::NotApplicable)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Count(n) => write!(f, "{}", n),
            Metric::NotApplicable => f.write_str(NOT_APPLICABLE_SENTINEL),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Metric::Count(n) => serializer.serialize_u32(*n),
            Metric::NotApplicable => serializer.serialize_str(NOT_APPLICABLE_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Count(u32),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Count(n) => Ok(Metric::Count(n)),
            Wire::Text(s) if s == NOT_APPLICABLE_SENTINEL => Ok(Metric::NotApplicable),
            Wire::Text(s) => Err(de::Error::custom(format!(
                "expected a count or \"{}\", got \"{}\"",
                NOT_APPLICABLE_SENTINEL, s
            ))),
        }
    }
}

/// A distribution channel tracked for content strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Sequence number; `None` only for the synthetic root entry
    pub sno: Option<u32>,

    pub name: String,

    pub status: PlatformStatus,

    pub committed: Metric,
    pub drafted: Metric,
    pub published: Metric,

    /// Link to the external content plan, or empty
    pub content_plan: String,

    /// Platform URL, empty, or the "via Instagram" marker
    pub platform_link: String,

    pub category: String,

    pub primary_content: String,
}

impl Platform {
    /// True for the "Website" root row that carries no pipeline counts
    pub fn is_root(&self) -> bool {
        self.sno.is_none()
    }

    pub fn has_content_plan(&self) -> bool {
        !self.content_plan.is_empty()
    }

    pub fn is_via_instagram(&self) -> bool {
        self.platform_link == VIA_INSTAGRAM_MARKER
    }

    /// Name, category or primary content contains `needle`
    ///
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.primary_content.to_lowercase().contains(needle)
    }
}

/// A hashtag with its usage guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashtag {
    /// Tag text including the leading '#'
    pub tag: String,
    pub category: String,
    pub usage_context: String,
    pub platform_suitability: String,
    /// 0-10
    pub popularity_score: u8,
    pub best_posting_time: String,
}

impl Hashtag {
    /// Category contains `needle`, which must already be lowercase
    pub fn matches_category(&self, needle: &str) -> bool {
        self.category.to_lowercase().contains(needle)
    }

    /// Tag, category or usage context contains `needle`, which must
    /// already be lowercase
    pub fn matches_query(&self, needle: &str) -> bool {
        self.tag.to_lowercase().contains(needle)
            || self.matches_category(needle)
            || self.usage_context.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub rank: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_round_trip() {
        for status in [
            PlatformStatus::Active,
            PlatformStatus::NotActive,
            PlatformStatus::AlreadyInPlace,
        ] {
            assert_eq!(PlatformStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(PlatformStatus::from_label("active"), None);
    }

    #[test]
    fn test_metric_serializes_sentinel() {
        assert_eq!(serde_json::to_string(&Metric::Count(45)).unwrap(), "45");
        assert_eq!(serde_json::to_string(&Metric::NotApplicable).unwrap(), "\"--\"");
    }

    #[test]
    fn test_metric_deserialize() {
        let m: Metric = serde_json::from_str("12").unwrap();
        assert_eq!(m, Metric::Count(12));

        let m: Metric = serde_json::from_str("\"--\"").unwrap();
        assert!(m.is_not_applicable());
        assert_eq!(m.or_zero(), 0);

        assert!(serde_json::from_str::<Metric>("\"n/a\"").is_err());
        assert!(serde_json::from_str::<Metric>("-3").is_err());
    }

    #[test]
    fn test_status_serde_uses_labels() {
        let json = serde_json::to_string(&PlatformStatus::AlreadyInPlace).unwrap();
        assert_eq!(json, "\"Already in Place\"");
    }
}
