//! Configuration constants and profile loading for marquee
//!
//! Profiles live in an INI file, one section per profile:
//!
//! ```ini
//! [default]
//! base_url = https://moviesapi-e88x.onrender.com/api
//! timeout_secs = 30
//! ```

use std::path::PathBuf;
use std::time::Duration;

use ini::Ini;
use thiserror::Error;

/// Default profile file path for marquee
pub const DEFAULT_PROFILE_PATH: &str = "~/.marquee/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "MARQUEE_PROFILE_PATH";

/// Catalog API used when a profile does not name one
pub const DEFAULT_BASE_URL: &str = "https://moviesapi-e88x.onrender.com/api";

const BASE_URL_KEY: &str = "base_url";
const TIMEOUT_KEY: &str = "timeout_secs";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read profile file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("Invalid value '{value}' for '{key}' in profile '{profile}'")]
    InvalidValue {
        profile: String,
        key: &'static str,
        value: String,
    },
}

/// Connection settings for the catalog backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProfile {
    base_url: String,
    timeout: Option<Duration>,
}

impl CatalogProfile {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for CatalogProfile {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

/// Load `profile_name` from the INI file at `profile_path`.
///
/// A missing file or section yields the default profile.
pub fn load_profile(profile_name: &str, profile_path: &str) -> Result<CatalogProfile, ConfigError> {
    let path = PathBuf::from(shellexpand::tilde(profile_path).into_owned());
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, path.display());

    if !path.exists() {
        tracing::debug!("Profile file not found, using blank profile");
        return Ok(CatalogProfile::default());
    }

    let ini = Ini::load_from_file(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    let Some(section) = ini.section(Some(profile_name)) else {
        tracing::debug!("Profile '{}' not found, using blank profile", profile_name);
        return Ok(CatalogProfile::default());
    };

    let base_url = section
        .get(BASE_URL_KEY)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);

    let timeout = section
        .get(TIMEOUT_KEY)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue {
                    profile: profile_name.to_string(),
                    key: TIMEOUT_KEY,
                    value: value.to_string(),
                })
        })
        .transpose()?;

    tracing::debug!("Profile loaded successfully, base_url: {}", base_url);
    Ok(CatalogProfile::new(base_url, timeout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn profile_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_profile_path() {
        assert_eq!(DEFAULT_PROFILE_PATH, "~/.marquee/profile");
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(PROFILE_PATH_ENV_VAR, "MARQUEE_PROFILE_PATH");
    }

    #[test]
    fn test_get_profile_path_env_override() {
        // Save current env var state
        let original = std::env::var_os(PROFILE_PATH_ENV_VAR);

        let test_path = "/custom/profile/path";
        std::env::set_var(PROFILE_PATH_ENV_VAR, test_path);
        assert_eq!(get_profile_path(), test_path);

        std::env::remove_var(PROFILE_PATH_ENV_VAR);
        assert_eq!(get_profile_path(), DEFAULT_PROFILE_PATH);

        // Restore original state
        if let Some(val) = original {
            std::env::set_var(PROFILE_PATH_ENV_VAR, val);
        }
    }

    #[test]
    fn test_load_named_profile() {
        let file = profile_file(
            "[default]\nbase_url = http://localhost:4000/api\n\n[staging]\nbase_url = https://staging.example.com/api\ntimeout_secs = 15\n",
        );
        let path = file.path().to_str().unwrap();

        let profile = load_profile("staging", path).unwrap();

        assert_eq!(profile.base_url(), "https://staging.example.com/api");
        assert_eq!(profile.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(
            load_profile("default", path).unwrap(),
            CatalogProfile::new("http://localhost:4000/api", None)
        );
    }

    #[test]
    fn test_missing_file_or_section_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("profile");
        assert_eq!(
            load_profile("default", missing.to_str().unwrap()).unwrap(),
            CatalogProfile::default()
        );

        let file = profile_file("[other]\nbase_url = http://other\n");
        let profile = load_profile("default", file.path().to_str().unwrap()).unwrap();
        assert_eq!(profile.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        let file = profile_file("[default]\ntimeout_secs = soon\n");

        let err = load_profile("default", file.path().to_str().unwrap()).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { key: "timeout_secs", .. }));
    }
}
