//! Programmed defaults, the lowest configuration layer.

use super::settings::{RoleSettings, Settings, SpeechSettings};
use crate::language::DEFAULT_LANGUAGE_KEY;

/// Returns the built-in settings.
///
/// No languages are available until a synthesizer reports them, and the
/// platform role table is the MSAA one without overrides.
pub fn default_settings() -> Settings {
    Settings {
        speech: SpeechSettings {
            language: Some(DEFAULT_LANGUAGE_KEY.to_string()),
            available_languages: None,
            default_language_map: Default::default(),
        },
        roles: RoleSettings::default(),
    }
}
