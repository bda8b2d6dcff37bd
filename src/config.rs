pub mod defaults;
pub mod settings;
pub mod user;

pub use settings::{RoleSettings, Settings, SpeechSettings};
pub use user::{load_settings_file, load_user_config, user_config_path};

use crate::events::DiagnosticEvent;
use std::path::Path;

#[derive(Debug, Default)]
pub struct SettingsLoadOutcome {
    pub settings: Settings,
    pub events: Vec<DiagnosticEvent>,
}

/// Load settings from every layer and merge them.
///
/// Layers, lowest precedence first: programmed defaults, user config,
/// `explicit_path`. A layer that fails to load is skipped with a warning.
pub fn load_settings(explicit_path: Option<&Path>) -> SettingsLoadOutcome {
    let mut events = Vec::new();

    let mut settings = defaults::default_settings();

    match load_user_config() {
        Ok(Some(user)) => {
            events.push(DiagnosticEvent::info("Loaded user config"));
            settings = settings.merge(user);
        }
        // No user config file exists - this is fine (zero-config experience)
        Ok(None) => {}
        Err(err) => {
            events.push(DiagnosticEvent::warning(format!(
                "Failed to load user config: {}",
                err
            )));
        }
    }

    if let Some(path) = explicit_path {
        match load_settings_file(path) {
            Ok(file) => {
                events.push(DiagnosticEvent::info(format!(
                    "Loaded config file: {}",
                    path.display()
                )));
                settings = settings.merge(file);
            }
            Err(err) => {
                events.push(DiagnosticEvent::warning(err.to_string()));
            }
        }
    }

    SettingsLoadOutcome { settings, events }
}
