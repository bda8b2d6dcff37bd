//! Synthesizer-internal default language keys.
//!
//! Some synthesizers use a pseudo language such as `default` for their own
//! fallback voice. The map translates such a key to a real tag.

use super::available::AvailableLanguageSet;
use super::tag::{LanguageTag, normalize_separators};
use crate::error::DefaultMapError;
use std::collections::BTreeMap;

/// Key the synthesizer uses for its own default language.
pub const DEFAULT_LANGUAGE_KEY: &str = "default";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultLanguageMap {
    entries: BTreeMap<String, LanguageTag>,
}

impl DefaultLanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `key` to `tag`. The key is normalized like a language tag.
    pub fn insert(&mut self, key: &str, tag: LanguageTag) -> Option<LanguageTag> {
        self.entries.insert(normalize_separators(key), tag)
    }

    /// Look up an already normalized key.
    pub fn get(&self, key: &str) -> Option<&LanguageTag> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageTag)> {
        self.entries.iter().map(|(key, tag)| (key.as_str(), tag))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the map against what the synthesizer can speak.
    ///
    /// Every mapped tag must be available, and no key may itself be an
    /// available language (the mapping would hide it).
    pub fn validate(&self, available: &AvailableLanguageSet) -> Result<(), Vec<DefaultMapError>> {
        let mut errors = Vec::new();
        for (key, tag) in self.iter() {
            if !available.contains(tag) {
                errors.push(DefaultMapError::UnsupportedTarget {
                    key: key.to_string(),
                    tag: tag.to_string(),
                });
            }
            if LanguageTag::parse(key).is_ok_and(|as_tag| available.contains(&as_tag)) {
                errors.push(DefaultMapError::ShadowedKey {
                    key: key.to_string(),
                });
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl FromIterator<(String, LanguageTag)> for DefaultLanguageMap {
    fn from_iter<T: IntoIterator<Item = (String, LanguageTag)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, tag) in iter {
            map.insert(&key, tag);
        }
        map
    }
}
