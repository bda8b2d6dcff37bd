use crate::error::{ConfigError, ConfigResult};
use crate::language::{AvailableLanguageSet, DefaultLanguageMap, LanguageResolver, LanguageTag};
use crate::role::{CanonicalRole, PlatformRoleTable, msaa_role_table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub speech: SpeechSettings,
    pub roles: RoleSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeechSettings {
    /// Key used when no language is requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_languages: Option<Vec<String>>,
    pub default_language_map: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleSettings {
    /// Platform role id (as a string key) to canonical role
    pub platform_roles: BTreeMap<String, CanonicalRole>,
}

impl Settings {
    /// Layer `overlay` on top of `self`. Scalars in `overlay` win when set;
    /// maps are merged key by key with `overlay` winning.
    pub fn merge(mut self, overlay: Settings) -> Settings {
        self.speech.language = overlay.speech.language.or(self.speech.language);
        self.speech.available_languages = overlay
            .speech
            .available_languages
            .or(self.speech.available_languages);
        self.speech
            .default_language_map
            .extend(overlay.speech.default_language_map);
        self.roles.platform_roles.extend(overlay.roles.platform_roles);
        self
    }

    pub fn available_languages(&self) -> ConfigResult<AvailableLanguageSet> {
        let raw = self.speech.available_languages.as_deref().unwrap_or_default();
        Ok(AvailableLanguageSet::parse_all(raw.iter().map(String::as_str))?)
    }

    pub fn default_language_map(&self) -> ConfigResult<DefaultLanguageMap> {
        let mut map = DefaultLanguageMap::new();
        for (key, tag) in &self.speech.default_language_map {
            map.insert(key, LanguageTag::parse(tag)?);
        }
        Ok(map)
    }

    pub fn language_resolver(&self) -> ConfigResult<LanguageResolver> {
        let resolver =
            LanguageResolver::new(self.available_languages()?, self.default_language_map()?);
        Ok(match &self.speech.language {
            Some(key) => resolver.with_current_language(key.clone()),
            None => resolver,
        })
    }

    /// MSAA defaults with the configured platform roles applied on top.
    pub fn platform_role_table(&self) -> ConfigResult<PlatformRoleTable> {
        let overrides = self
            .roles
            .platform_roles
            .iter()
            .map(|(id, role)| {
                id.trim()
                    .parse::<u32>()
                    .map(|id| (id, *role))
                    .map_err(|_| ConfigError::InvalidPlatformRoleId(id.clone()))
            })
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(msaa_role_table().extend_with(overrides))
    }
}
