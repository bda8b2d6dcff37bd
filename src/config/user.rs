//! User configuration loading for a11y-canon.
//!
//! User config location: $XDG_CONFIG_HOME/a11y-canon/a11y-canon.toml
//! Fallback: the platform config directory (e.g. ~/.config on Linux)

use super::settings::Settings;
use crate::error::{ConfigError, ConfigResult};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "a11y-canon";
const CONFIG_FILE: &str = "a11y-canon.toml";

/// Returns the path to the user configuration file.
///
/// The path is determined by:
/// 1. If $XDG_CONFIG_HOME is set: $XDG_CONFIG_HOME/a11y-canon/a11y-canon.toml
/// 2. Otherwise: <platform config dir>/a11y-canon/a11y-canon.toml
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)?;
    Some(base.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Read and parse a settings file.
pub fn load_settings_file(path: &Path) -> ConfigResult<Settings> {
    let contents = fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
    toml::from_str(&contents).map_err(|err| ConfigError::parse(path, err))
}

/// Load the user config. A missing file is `Ok(None)`.
pub fn load_user_config() -> ConfigResult<Option<Settings>> {
    match user_config_path() {
        Some(path) if path.exists() => load_settings_file(&path).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::ffi::OsString;

    /// Run `f` with XDG_CONFIG_HOME set to `value`, restoring it afterwards.
    fn with_xdg_config_home<T>(value: &Path, f: impl FnOnce() -> T) -> T {
        let original: Option<OsString> = env::var_os("XDG_CONFIG_HOME");
        // SAFETY: callers are #[serial], so no other test touches the environment
        unsafe {
            env::set_var("XDG_CONFIG_HOME", value);
        }
        let result = f();
        // SAFETY: same as above, restoring the original state
        unsafe {
            match original {
                Some(val) => env::set_var("XDG_CONFIG_HOME", val),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
        }
        result
    }

    #[test]
    #[serial]
    fn user_config_path_uses_xdg_config_home_when_set() {
        let path = with_xdg_config_home(Path::new("/custom/config"), user_config_path);
        assert_eq!(
            path,
            Some(PathBuf::from("/custom/config/a11y-canon/a11y-canon.toml")),
            "should use XDG_CONFIG_HOME/a11y-canon/a11y-canon.toml"
        );
    }

    #[test]
    #[serial]
    fn load_user_config_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = with_xdg_config_home(dir.path(), load_user_config).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    #[serial]
    fn load_user_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join(CONFIG_FILE),
            "[speech]\navailable_languages = [\"de\"]\n",
        )
        .unwrap();

        let loaded = with_xdg_config_home(dir.path(), load_user_config)
            .unwrap()
            .expect("config should be found");
        assert_eq!(
            loaded.speech.available_languages,
            Some(vec!["de".to_string()])
        );
    }

    #[test]
    fn load_settings_file_reports_parse_errors() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "[speech\n").unwrap();
        let err = load_settings_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_settings_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
