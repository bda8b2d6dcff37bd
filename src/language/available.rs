use super::tag::LanguageTag;
use crate::error::LanguageTagError;
use std::collections::BTreeSet;

/// Languages a synthesizer can actually speak.
///
/// Kept sorted so iteration, and every tie-break built on it, is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableLanguageSet {
    tags: BTreeSet<LanguageTag>,
}

impl AvailableLanguageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every entry, failing on the first invalid tag.
    pub fn parse_all<'a>(raw: impl IntoIterator<Item = &'a str>) -> Result<Self, LanguageTagError> {
        raw.into_iter()
            .map(LanguageTag::parse)
            .collect::<Result<BTreeSet<_>, _>>()
            .map(|tags| Self { tags })
    }

    pub fn insert(&mut self, tag: LanguageTag) -> bool {
        self.tags.insert(tag)
    }

    pub fn contains(&self, tag: &LanguageTag) -> bool {
        self.tags.contains(tag)
    }

    /// The member equal to `tag`, if any.
    pub fn get(&self, tag: &LanguageTag) -> Option<&LanguageTag> {
        self.tags.get(tag)
    }

    /// Members sharing the base language of `tag`, in ascending order.
    pub fn with_base<'a>(&'a self, tag: &'a LanguageTag) -> impl Iterator<Item = &'a LanguageTag> {
        self.tags.iter().filter(move |member| member.same_base(tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<LanguageTag> for AvailableLanguageSet {
    fn from_iter<T: IntoIterator<Item = LanguageTag>>(iter: T) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}
