//! Dataset loading and validation.
//!
//! Raw JSON is deserialized into `RawDataset`, then every record is
//! checked and converted into its typed form. Any failure aborts the
//! whole load; there is no partially loaded dataset.

use super::raw::{RawCompetitor, RawDataset, RawHashtag, RawMetric, RawPlatform};
use super::schema::{Competitor, Hashtag, Metric, Platform, PlatformStatus};
use crate::utils::config::{
    BUILTIN_DATASET, MAX_POPULARITY_SCORE, NOT_APPLICABLE_SENTINEL, VIA_INSTAGRAM_MARKER,
};
use crate::utils::error::{LoadError, ValidationError};
use log::{debug, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Validated, immutable record collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    platforms: Vec<Platform>,
    hashtags: Vec<Hashtag>,
    competitors: Vec<Competitor>,
}

impl Dataset {
    /// Load the dataset compiled into the binary
    ///
    /// **Public** - default source for the CLI and tests
    ///
    /// # Errors
    /// Only if the embedded definition itself is malformed.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    /// Parse and validate a dataset JSON document
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw)?)
    }

    /// Read, parse and validate a dataset file
    ///
    /// **Public** - file-backed replacement for the built-in data
    ///
    /// # Errors
    /// * `LoadError::Io` - file cannot be read
    /// * `LoadError::Json` - file is not a dataset document
    /// * `LoadError::Validation` - records are malformed
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!("Reading dataset from: {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Validate raw records into a dataset
    ///
    /// **Public** - main validation entry point
    ///
    /// Competitors are returned in rank order.
    pub fn from_raw(raw: RawDataset) -> Result<Self, ValidationError> {
        let platforms = validate_platforms(raw.platforms)?;
        let hashtags = validate_hashtags(raw.hashtags)?;
        let competitors = validate_competitors(raw.competitors)?;

        info!(
            "Loaded {} platforms, {} hashtags, {} competitors",
            platforms.len(),
            hashtags.len(),
            competitors.len()
        );

        Ok(Self {
            platforms,
            hashtags,
            competitors,
        })
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn hashtags(&self) -> &[Hashtag] {
        &self.hashtags
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }
}

/// Anything that can produce a validated dataset
///
/// The built-in literal and JSON files are provided; other loaders only
/// need to produce the same record shapes.
pub trait DatasetSource {
    /// Human-readable origin, used in logs
    fn describe(&self) -> String;

    fn load_dataset(&self) -> Result<Dataset, LoadError>;
}

/// The dataset compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinData;

impl DatasetSource for BuiltinData {
    fn describe(&self) -> String {
        "built-in dataset".to_string()
    }

    fn load_dataset(&self) -> Result<Dataset, LoadError> {
        Dataset::builtin()
    }
}

/// A dataset JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFile(pub PathBuf);

impl DatasetSource for JsonFile {
    fn describe(&self) -> String {
        self.0.display().to_string()
    }

    fn load_dataset(&self) -> Result<Dataset, LoadError> {
        Dataset::from_file(&self.0)
    }
}

/// Validate platform records
///
/// **Private** - enforces the root-entry and metric invariants
fn validate_platforms(raw: Vec<RawPlatform>) -> Result<Vec<Platform>, ValidationError> {
    let mut names = HashSet::new();
    let mut sequences = HashSet::new();
    let mut platforms = Vec::with_capacity(raw.len());

    for (index, record) in raw.into_iter().enumerate() {
        let platform = validate_platform(index, record)?;

        if !names.insert(platform.name.clone()) {
            return Err(ValidationError::DuplicatePlatform(platform.name));
        }
        if let Some(sno) = platform.sno {
            if !sequences.insert(sno) {
                return Err(ValidationError::DuplicateSequence(sno));
            }
        }

        platforms.push(platform);
    }

    let roots = platforms.iter().filter(|p| p.is_root()).count();
    if roots != 1 {
        return Err(ValidationError::RootEntryCount(roots));
    }

    debug!("Validated {} platforms", platforms.len());
    Ok(platforms)
}

fn validate_platform(index: usize, raw: RawPlatform) -> Result<Platform, ValidationError> {
    if raw.name.trim().is_empty() {
        return Err(ValidationError::EmptyName {
            kind: "platform",
            index,
        });
    }

    let status = PlatformStatus::from_label(&raw.status).ok_or_else(|| {
        ValidationError::UnknownStatus {
            platform: raw.name.clone(),
            status: raw.status.clone(),
        }
    })?;

    let sno = match raw.sno {
        Some(value) if value <= 0 || value > i64::from(u32::MAX) => {
            return Err(ValidationError::InvalidSequence {
                platform: raw.name,
                value,
            })
        }
        Some(value) => Some(value as u32),
        None => None,
    };

    let is_root = sno.is_none();
    let committed = validate_metric(&raw.name, "committed", &raw.committed, is_root)?;
    let drafted = validate_metric(&raw.name, "drafted", &raw.drafted, is_root)?;
    let published = validate_metric(&raw.name, "published", &raw.published, is_root)?;

    if !raw.content_plan.is_empty() && !is_http_url(&raw.content_plan) {
        return Err(ValidationError::InvalidLink {
            record: raw.name,
            field: "content plan",
            value: raw.content_plan,
        });
    }

    if !raw.platform_link.is_empty()
        && raw.platform_link != VIA_INSTAGRAM_MARKER
        && !is_http_url(&raw.platform_link)
    {
        return Err(ValidationError::InvalidLink {
            record: raw.name,
            field: "platform link",
            value: raw.platform_link,
        });
    }

    Ok(Platform {
        sno,
        name: raw.name,
        status,
        committed,
        drafted,
        published,
        content_plan: raw.content_plan,
        platform_link: raw.platform_link,
        category: raw.category,
        primary_content: raw.primary_content,
    })
}

/// Convert one raw count
///
/// The root entry must use the sentinel; every other entry must be a
/// non-negative number.
fn validate_metric(
    platform: &str,
    field: &'static str,
    raw: &RawMetric,
    is_root: bool,
) -> Result<Metric, ValidationError> {
    match raw {
        RawMetric::Text(text) if text == NOT_APPLICABLE_SENTINEL => {
            if is_root {
                Ok(Metric::NotApplicable)
            } else {
                Err(ValidationError::MisplacedSentinel {
                    platform: platform.to_string(),
                    field,
                })
            }
        }
        RawMetric::Text(text) => Err(ValidationError::InvalidMetric {
            platform: platform.to_string(),
            field,
            value: text.clone(),
        }),
        RawMetric::Number(_) if is_root => Err(ValidationError::RootMetricNotSentinel {
            platform: platform.to_string(),
            field,
        }),
        RawMetric::Number(value) if *value < 0 => Err(ValidationError::NegativeCount {
            platform: platform.to_string(),
            field,
            value: *value,
        }),
        RawMetric::Number(value) => u32::try_from(*value)
            .map(Metric::Count)
            .map_err(|_| ValidationError::InvalidMetric {
                platform: platform.to_string(),
                field,
                value: value.to_string(),
            }),
    }
}

fn validate_hashtags(raw: Vec<RawHashtag>) -> Result<Vec<Hashtag>, ValidationError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            if record.tag.trim().is_empty() {
                return Err(ValidationError::EmptyName {
                    kind: "hashtag",
                    index,
                });
            }
            if !record.tag.starts_with('#') {
                return Err(ValidationError::MissingHashPrefix(record.tag));
            }
            if record.popularity_score < 0
                || record.popularity_score > i64::from(MAX_POPULARITY_SCORE)
            {
                return Err(ValidationError::ScoreOutOfRange {
                    tag: record.tag,
                    score: record.popularity_score,
                });
            }

            Ok(Hashtag {
                popularity_score: record.popularity_score as u8,
                tag: record.tag,
                category: record.category,
                usage_context: record.usage_context,
                platform_suitability: record.platform_suitability,
                best_posting_time: record.best_posting_time,
            })
        })
        .collect()
}

fn validate_competitors(raw: Vec<RawCompetitor>) -> Result<Vec<Competitor>, ValidationError> {
    let mut ranks = HashSet::new();
    let mut competitors = Vec::with_capacity(raw.len());

    for (index, record) in raw.into_iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(ValidationError::EmptyName {
                kind: "competitor",
                index,
            });
        }
        if record.rank <= 0 || record.rank > i64::from(u32::MAX) {
            return Err(ValidationError::InvalidRank {
                name: record.name,
                rank: record.rank,
            });
        }

        let rank = record.rank as u32;
        if !ranks.insert(rank) {
            return Err(ValidationError::DuplicateRank(rank));
        }

        let website = if record.website.is_empty() {
            None
        } else if is_http_url(&record.website) {
            Some(record.website)
        } else {
            return Err(ValidationError::InvalidLink {
                record: record.name,
                field: "website",
                value: record.website,
            });
        };

        competitors.push(Competitor {
            rank,
            name: record.name,
            website,
        });
    }

    competitors.sort_by_key(|c| c.rank);
    Ok(competitors)
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}
