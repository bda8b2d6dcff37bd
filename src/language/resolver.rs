//! Resolution of a requested language to one the synthesizer can speak.
//!
//! Tiers are tried in order and the first hit wins:
//!
//! 1. default map: synthesizer-internal keys such as `default`
//! 2. exact: the full tag is available
//! 3. base only: the request's base language is available without a region
//! 4. region substitution: another region of the same base language
//!
//! When nothing matches the result is `None`, which callers treat as "keep
//! the current voice language".

use super::available::AvailableLanguageSet;
use super::defaults::{DEFAULT_LANGUAGE_KEY, DefaultLanguageMap};
use super::tag::{LanguageTag, normalize_separators};
use crate::events::{DiagnosticEvent, emit_all};
use serde::Serialize;
use std::fmt;

const LOG_TARGET: &str = "a11y_canon::language";

/// Which tier produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionTier {
    DefaultMap,
    Exact,
    BaseOnly,
    RegionSubstitution,
}

impl ResolutionTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionTier::DefaultMap => "default-map",
            ResolutionTier::Exact => "exact",
            ResolutionTier::BaseOnly => "base-only",
            ResolutionTier::RegionSubstitution => "region-substitution",
        }
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub tag: LanguageTag,
    pub tier: ResolutionTier,
}

impl Resolution {
    fn new(tag: LanguageTag, tier: ResolutionTier) -> Self {
        Self { tag, tier }
    }
}

/// Resolution result with the diagnostics produced on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOutcome {
    pub resolution: Option<Resolution>,
    pub events: Vec<DiagnosticEvent>,
}

impl ResolveOutcome {
    pub fn tag(&self) -> Option<&LanguageTag> {
        self.resolution.as_ref().map(|resolution| &resolution.tag)
    }
}

/// Picks the closest available language for a request.
///
/// Holds only immutable data and can be shared between threads.
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    available: AvailableLanguageSet,
    defaults: DefaultLanguageMap,
    current_language: String,
}

impl LanguageResolver {
    pub fn new(available: AvailableLanguageSet, defaults: DefaultLanguageMap) -> Self {
        Self {
            available,
            defaults,
            current_language: DEFAULT_LANGUAGE_KEY.to_string(),
        }
    }

    /// Set the key used when no language is requested.
    pub fn with_current_language(mut self, key: impl Into<String>) -> Self {
        self.current_language = key.into();
        self
    }

    pub fn available(&self) -> &AvailableLanguageSet {
        &self.available
    }

    pub fn defaults(&self) -> &DefaultLanguageMap {
        &self.defaults
    }

    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    /// Resolve a raw request, forwarding diagnostics to the log.
    pub fn resolve(&self, requested: Option<&str>) -> Option<LanguageTag> {
        let outcome = self.resolve_with_events(requested);
        emit_all(&outcome.events, LOG_TARGET);
        outcome.resolution.map(|resolution| resolution.tag)
    }

    /// Resolve a raw request and return the diagnostics instead of logging them.
    ///
    /// An absent or empty request stands for the current language key.
    pub fn resolve_with_events(&self, requested: Option<&str>) -> ResolveOutcome {
        resolve_borrowed(
            requested,
            &self.current_language,
            &self.available,
            &self.defaults,
        )
    }

    /// Resolve an already parsed tag against the available set.
    ///
    /// The default map is not consulted since its keys are not language tags.
    pub fn resolve_tag(&self, requested: &LanguageTag) -> Option<Resolution> {
        resolve_available_tag(requested, &self.available)
    }
}

fn resolve_borrowed(
    requested: Option<&str>,
    current_language: &str,
    available: &AvailableLanguageSet,
    defaults: &DefaultLanguageMap,
) -> ResolveOutcome {
    let raw = requested
        .filter(|raw| !raw.is_empty())
        .unwrap_or(current_language);
    let key = normalize_separators(raw);
    let mut events = Vec::new();

    if let Some(mapped) = defaults.get(&key) {
        match available.get(mapped) {
            Some(tag) => {
                return ResolveOutcome {
                    resolution: Some(Resolution::new(tag.clone(), ResolutionTier::DefaultMap)),
                    events,
                };
            }
            None => events.push(DiagnosticEvent::error(format!(
                "Default language for '{}' is '{}', which the synthesizer does not support",
                key, mapped
            ))),
        }
    }

    let resolution = match LanguageTag::parse(&key) {
        Ok(tag) => resolve_available_tag(&tag, available),
        Err(_) => None,
    };
    if resolution.is_none() {
        events.push(DiagnosticEvent::debug(format!(
            "Unable to find a synthesizer language for '{}'",
            key
        )));
    }

    ResolveOutcome { resolution, events }
}

fn resolve_available_tag(
    requested: &LanguageTag,
    available: &AvailableLanguageSet,
) -> Option<Resolution> {
    if let Some(exact) = available.get(requested) {
        return Some(Resolution::new(exact.clone(), ResolutionTier::Exact));
    }

    if requested.has_region()
        && let Some(base) = available.get(&requested.without_region())
    {
        return Some(Resolution::new(base.clone(), ResolutionTier::BaseOnly));
    }

    // Smallest tag among the remaining same-base members
    available
        .with_base(requested)
        .next()
        .map(|member| Resolution::new(member.clone(), ResolutionTier::RegionSubstitution))
}

/// Resolve `requested` against `available`, consulting `defaults` first.
///
/// An absent request stands for the `default` key.
pub fn resolve_language(
    requested: Option<&str>,
    available: &AvailableLanguageSet,
    defaults: &DefaultLanguageMap,
) -> Option<LanguageTag> {
    let outcome = resolve_borrowed(requested, DEFAULT_LANGUAGE_KEY, available, defaults);
    emit_all(&outcome.events, LOG_TARGET);
    outcome.resolution.map(|resolution| resolution.tag)
}
