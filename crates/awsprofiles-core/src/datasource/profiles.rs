//! Profiles data source

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::error::{DataSourceError, DataSourceResult};
use crate::config::{ConfigResult, ProfilesConfig};
use crate::log_debug;
use crate::logging::{Logger, NoOpLogger, SharedLogger};
use crate::sources::{FileProfileSource, ProfileSource};
use crate::types::{Profile, ProfileField};

/// Map each profile to a flat `field name -> value` mapping
pub fn flatten_profiles(profiles: &[Profile]) -> Vec<HashMap<String, String>> {
    profiles
        .iter()
        .map(|profile| {
            ProfileField::ALL
                .iter()
                .map(|field| (field.key().to_string(), profile.get(*field).to_string()))
                .collect()
        })
        .collect()
}

/// Concatenate every profile name, each prefixed with `_`
///
/// `[a]`, `[b]` gives `_a_b`. Order-sensitive and not collision-resistant
/// (`[a_b]` alone also gives `_a_b`); it only has to be stable across reads
/// of an unchanged file.
pub fn id_from_profile_names(profiles: &[Profile]) -> String {
    profiles.iter().fold(String::new(), |mut id, profile| {
        id.push('_');
        id.push_str(&profile.name);
        id
    })
}

/// Result of one data source read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilesState {
    pub id: String,
    pub profiles: Vec<Profile>,
}

impl ProfilesState {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            id: id_from_profile_names(&profiles),
            profiles,
        }
    }

    pub fn flattened(&self) -> Vec<HashMap<String, String>> {
        flatten_profiles(&self.profiles)
    }

    /// Pretty JSON `{ "id": ..., "profiles": [...] }`, secrets included
    pub fn to_json(&self) -> DataSourceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read-only data source listing profiles
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use awsprofiles_core::datasource::ProfilesDataSource;
/// use awsprofiles_core::sources::MemoryProfileSource;
/// use awsprofiles_core::Profile;
///
/// let source = MemoryProfileSource::with_profiles(vec![Profile::new("a"), Profile::new("b")]);
/// let data_source = ProfilesDataSource::with_source(Arc::new(source));
/// assert_eq!(data_source.read().unwrap().id, "_a_b");
/// ```
pub struct ProfilesDataSource {
    source: Arc<dyn ProfileSource>,
    logger: SharedLogger,
}

impl ProfilesDataSource {
    pub fn new(source: Arc<dyn ProfileSource>, logger: SharedLogger) -> Self {
        Self { source, logger }
    }

    /// Data source without logging
    pub fn with_source(source: Arc<dyn ProfileSource>) -> Self {
        Self::new(source, Arc::new(NoOpLogger::new()))
    }

    /// File-backed data source using the resolved credentials path
    pub fn from_config(config: &ProfilesConfig, logger: SharedLogger) -> ConfigResult<Self> {
        let source = FileProfileSource::from_config(config)?;
        Ok(Self::new(Arc::new(source), logger))
    }

    pub fn source(&self) -> &Arc<dyn ProfileSource> {
        &self.source
    }

    /// Load profiles once and build the state a host stores
    pub fn read(&self) -> DataSourceResult<ProfilesState> {
        log_debug!(self.logger, "Reading profiles from {} source", self.source.name());

        let profiles = self.source.load()?;
        if profiles.is_empty() {
            log_debug!(self.logger, "No profiles in {} source", self.source.name());
            return Err(DataSourceError::NoProfiles);
        }

        let state = ProfilesState::new(profiles);
        log_debug!(self.logger, "Read {} profile(s), id {}", state.profiles.len(), state.id);
        Ok(state)
    }
}

impl std::fmt::Debug for ProfilesDataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfilesDataSource")
            .field("source", &self.source.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::PROFILES_ATTRIBUTE;
    use crate::parser::ProfileError;
    use crate::sources::MemoryProfileSource;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// Collects messages so tests can check what was logged
    #[derive(Default)]
    struct RecordingLogger {
        messages: Mutex<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn debug(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
        fn info(&self, message: &str) {
            self.debug(message);
        }
        fn warn(&self, message: &str) {
            self.debug(message);
        }
        fn error(&self, message: &str) {
            self.debug(message);
        }
    }

    fn file_data_source(content: &str) -> (tempfile::TempDir, ProfilesDataSource) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials");
        fs::write(&path, content).unwrap();
        let source = FileProfileSource::new(&path);
        (dir, ProfilesDataSource::with_source(Arc::new(source)))
    }

    #[test]
    fn test_id_from_profile_names() {
        assert_eq!(id_from_profile_names(&[]), "");
        assert_eq!(
            id_from_profile_names(&[Profile::new("a"), Profile::new("b")]),
            "_a_b"
        );
        assert_eq!(
            id_from_profile_names(&[Profile::new("b"), Profile::new("a")]),
            "_b_a"
        );
    }

    #[test]
    fn test_flatten_profiles() {
        let profiles = vec![Profile::new("dev")
            .with_access_key_id("AKID")
            .with_secret_access_key("SECRET")];

        let flat = flatten_profiles(&profiles);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].len(), 5);
        assert_eq!(flat[0]["name"], "dev");
        assert_eq!(flat[0]["aws_access_key_id"], "AKID");
        assert_eq!(flat[0]["aws_secret_access_key"], "SECRET");
        assert_eq!(flat[0]["aws_session_token"], "");
        assert_eq!(flat[0]["region"], "");
    }

    #[test]
    fn test_read_from_file() {
        let (_dir, data_source) = file_data_source(
            "[a]\naws_access_key_id = A\naws_secret_access_key = SA\n\n[b]\naws_access_key_id = B\n",
        );

        let state = data_source.read().unwrap();
        assert_eq!(state.id, "_a_b");
        assert_eq!(state.profiles.len(), 2);
        assert_eq!(state.flattened()[1]["aws_access_key_id"], "B");
    }

    #[test]
    fn test_empty_file_is_no_profiles() {
        let (_dir, data_source) = file_data_source("\n\n");
        let err = data_source.read().unwrap_err();
        assert!(matches!(err, DataSourceError::NoProfiles));
        assert_eq!(err.to_string(), "No profiles found. Setup profiles before calling this.");
    }

    #[test]
    fn test_source_errors_are_wrapped() {
        let dir = tempdir().unwrap();
        let source = FileProfileSource::new(dir.path().join("missing"));
        let data_source = ProfilesDataSource::with_source(Arc::new(source));

        let err = data_source.read().unwrap_err();
        assert!(matches!(err, DataSourceError::Source(ProfileError::Open { .. })));
        assert!(err.to_string().starts_with("getting Profiles: "));
    }

    #[test]
    fn test_malformed_file_is_surfaced() {
        let (_dir, data_source) = file_data_source("aws_access_key_id = A\n");
        let err = data_source.read().unwrap_err();
        assert!(matches!(err, DataSourceError::Source(ProfileError::Malformed { .. })));
    }

    #[test]
    fn test_state_json() {
        let state = ProfilesState::new(vec![Profile::new("a").with_region("us-east-1")]);
        let value: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();

        assert_eq!(value["id"], "_a");
        assert_eq!(value[PROFILES_ATTRIBUTE][0]["name"], "a");
        assert_eq!(value[PROFILES_ATTRIBUTE][0]["region"], "us-east-1");
    }

    #[test]
    fn test_read_logs_without_secrets() {
        let logger = Arc::new(RecordingLogger::default());
        let source = MemoryProfileSource::with_profiles(vec![
            Profile::new("a").with_secret_access_key("TOPSECRET")
        ]);
        let data_source = ProfilesDataSource::new(Arc::new(source), logger.clone());

        data_source.read().unwrap();
        let messages = logger.messages.lock().unwrap();
        assert!(messages.iter().any(|m| m.contains("Reading profiles from memory source")));
        assert!(messages.iter().all(|m| !m.contains("TOPSECRET")));
    }
}
