//! Language tags made of a base language and an optional region.
//!
//! Tags are stored lowercase with `-` as the separator, so `fr_FR`, `fr-fr`
//! and `FR-FR` are the same tag.

use crate::error::LanguageTagError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static SUBTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+$").expect("valid regex for subtag pattern"));

/// Lowercase `raw` and use `-` as the subtag separator.
pub fn normalize_separators(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('_', "-")
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageTag {
    base: String,
    region: Option<String>,
}

impl LanguageTag {
    /// Parse a tag such as `en`, `en-GB` or `en_gb`.
    ///
    /// Everything after the first separator is treated as the region, so
    /// `zh-hans-cn` has base `zh` and region `hans-cn`.
    pub fn parse(raw: &str) -> Result<Self, LanguageTagError> {
        let normalized = normalize_separators(raw);
        if normalized.is_empty() {
            return Err(LanguageTagError::Empty);
        }

        let (base, region) = match normalized.split_once('-') {
            Some((base, region)) => (base, Some(region)),
            None => (normalized.as_str(), None),
        };

        let invalid = |subtag: &str| LanguageTagError::InvalidSubtag {
            tag: raw.to_string(),
            subtag: subtag.to_string(),
        };

        if !SUBTAG.is_match(base) {
            return Err(invalid(base));
        }
        if let Some(region) = region
            && let Some(bad) = region.split('-').find(|part| !SUBTAG.is_match(part))
        {
            return Err(invalid(bad));
        }

        Ok(Self {
            base: base.to_string(),
            region: region.map(str::to_string),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The tag with its region removed.
    pub fn without_region(&self) -> LanguageTag {
        LanguageTag {
            base: self.base.clone(),
            region: None,
        }
    }

    pub fn has_region(&self) -> bool {
        self.region.is_some()
    }

    pub fn same_base(&self, other: &LanguageTag) -> bool {
        self.base == other.base
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.base, region),
            None => f.write_str(&self.base),
        }
    }
}

impl FromStr for LanguageTag {
    type Err = LanguageTagError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl Serialize for LanguageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LanguageTag::parse(&raw).map_err(serde::de::Error::custom)
    }
}
