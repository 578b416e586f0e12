//! File-based settings (YAML)
//!
//! Settings are optional. A missing file means defaults; the credentials
//! file itself is never written.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::traits::{ConfigError, ConfigResult};
use crate::parser::ParseOptions;

/// Settings controlling where profiles come from
///
/// ```yaml
/// credentials_file: ~/work/.aws/credentials
/// extract_region: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilesConfig {
    /// Credentials file to read instead of `~/.aws/credentials`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_file: Option<PathBuf>,

    /// Fill the region field from `region = ...` lines
    #[serde(default = "default_true")]
    pub extract_region: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            credentials_file: None,
            extract_region: true,
        }
    }
}

impl ProfilesConfig {
    /// Point at a specific credentials file
    pub fn with_credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    /// Enable or disable region extraction
    pub fn with_extract_region(mut self, extract_region: bool) -> Self {
        self.extract_region = extract_region;
        self
    }

    /// Parser options derived from these settings
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            extract_region: self.extract_region,
        }
    }
}

/// Read-only YAML settings file with an in-memory cache
///
/// # Example
///
/// ```no_run
/// use awsprofiles_core::config::SettingsFile;
///
/// let settings = SettingsFile::user();
/// let config = settings.get().unwrap();
/// ```
pub struct SettingsFile {
    path: PathBuf,
    cache: RwLock<Option<ProfilesConfig>>,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// User-level settings (~/.config/awsprofiles/config.yaml)
    pub fn user() -> Self {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("awsprofiles").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> ConfigResult<ProfilesConfig> {
        if !self.path.exists() {
            return Ok(ProfilesConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ProfilesConfig::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", self.path.display(), e)))
    }

    /// Cached settings, loading from disk on first use
    pub fn get(&self) -> ConfigResult<ProfilesConfig> {
        let cache = self.cache.read().unwrap();
        if let Some(config) = cache.as_ref() {
            return Ok(config.clone());
        }
        drop(cache);

        self.reload()
    }

    /// Settings with caller overrides applied
    ///
    /// The file is only read when one of the overrides is missing, so a
    /// caller passing both never sees a broken or unreadable settings file.
    pub fn with_overrides(
        &self,
        credentials_file: Option<&Path>,
        extract_region: Option<bool>,
    ) -> ConfigResult<ProfilesConfig> {
        let mut config = match (credentials_file, extract_region) {
            (Some(_), Some(_)) => ProfilesConfig::default(),
            _ => self.get()?,
        };
        if let Some(path) = credentials_file {
            config.credentials_file = Some(path.to_path_buf());
        }
        if let Some(extract_region) = extract_region {
            config.extract_region = extract_region;
        }
        Ok(config)
    }

    /// Reload settings from disk (invalidate cache)
    pub fn reload(&self) -> ConfigResult<ProfilesConfig> {
        let config = self.load()?;
        let mut cache = self.cache.write().unwrap();
        *cache = Some(config.clone());
        Ok(config)
    }
}

impl std::fmt::Debug for SettingsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsFile")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_settings_are_defaults() {
        let dir = tempdir().unwrap();
        let settings = SettingsFile::new(dir.path().join("config.yaml"));

        assert!(!settings.exists());
        assert_eq!(settings.get().unwrap(), ProfilesConfig::default());
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "credentials_file: /tmp/creds\nextract_region: false\n").unwrap();

        let config = SettingsFile::new(&path).get().unwrap();
        assert_eq!(config.credentials_file, Some(PathBuf::from("/tmp/creds")));
        assert!(!config.extract_region);
        assert!(!config.parse_options().extract_region);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "credentials_file: /tmp/creds\n").unwrap();

        let config = SettingsFile::new(&path).get().unwrap();
        assert!(config.extract_region);
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "extract_region: [not, a, bool]\n").unwrap();

        let err = SettingsFile::new(&path).get().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_full_overrides_skip_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "extract_region: [not, a, bool]\n").unwrap();
        let settings = SettingsFile::new(&path);

        let config = settings
            .with_overrides(Some(Path::new("/tmp/creds")), Some(false))
            .unwrap();
        assert_eq!(config.credentials_file, Some(PathBuf::from("/tmp/creds")));
        assert!(!config.extract_region);

        // Either override missing falls back to the (broken) file
        let err = settings.with_overrides(Some(Path::new("/tmp/creds")), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = settings.with_overrides(None, Some(true)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_partial_overrides_merge_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "credentials_file: /from/settings\nextract_region: false\n").unwrap();

        let config = SettingsFile::new(&path).with_overrides(None, Some(true)).unwrap();
        assert_eq!(config.credentials_file, Some(PathBuf::from("/from/settings")));
        assert!(config.extract_region);
    }

    #[test]
    fn test_cache_until_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let settings = SettingsFile::new(&path);
        assert!(settings.get().unwrap().extract_region);

        fs::write(&path, "extract_region: false\n").unwrap();
        assert!(settings.get().unwrap().extract_region);
        assert!(!settings.reload().unwrap().extract_region);
    }
}
