//! Python bindings for awsprofiles via PyO3

use pyo3::prelude::*;
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use awsprofiles_core::config::{
    resolve_credentials_path, ConfigError, SettingsFile,
    default_credentials_path as core_default_credentials_path,
};
use awsprofiles_core::datasource::{
    DataSourceError, ProfilesDataSource as CoreProfilesDataSource,
    ProfilesState as CoreProfilesState, profiles_schema as core_profiles_schema,
    PROFILES_ATTRIBUTE,
};
use awsprofiles_core::logging::{ConsoleLogger, NoOpLogger, SharedLogger};
use awsprofiles_core::parser::{ParseOptions, ProfileError, ProfileParser};
use awsprofiles_core::sources::{FileProfileSource, ProfileSource};
use awsprofiles_core::types::{Profile as CoreProfile, ProfileField};

// ============================================================================
// Error mapping
// ============================================================================

fn profile_err(err: ProfileError) -> PyErr {
    match &err {
        ProfileError::Open { .. } | ProfileError::Read { .. } => PyIOError::new_err(err.to_string()),
        ProfileError::Malformed { .. } => PyValueError::new_err(err.to_string()),
    }
}

fn data_source_err(err: DataSourceError) -> PyErr {
    match err {
        DataSourceError::Source(inner) => profile_err(inner),
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

fn config_err(err: ConfigError) -> PyErr {
    match &err {
        ConfigError::Io(_) => PyIOError::new_err(err.to_string()),
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}

// ============================================================================
// Profile
// ============================================================================

/// A single profile; secrets are readable but kept out of repr()
#[pyclass]
#[derive(Clone)]
pub struct Profile {
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub aws_access_key_id: String,
    #[pyo3(get)]
    pub aws_secret_access_key: String,
    #[pyo3(get)]
    pub aws_session_token: String,
    #[pyo3(get)]
    pub region: String,
}

#[pymethods]
impl Profile {
    /// Flat mapping of field name to value
    pub fn to_dict(&self) -> HashMap<String, String> {
        let core = CoreProfile::from(self.clone());
        ProfileField::ALL
            .iter()
            .map(|field| (field.key().to_string(), core.get(*field).to_string()))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Profile(name='{}', aws_access_key_id='{}', region='{}')",
            self.name, self.aws_access_key_id, self.region
        )
    }
}

impl From<Profile> for CoreProfile {
    fn from(p: Profile) -> Self {
        CoreProfile::new(p.name)
            .with_access_key_id(p.aws_access_key_id)
            .with_secret_access_key(p.aws_secret_access_key)
            .with_session_token(p.aws_session_token)
            .with_region(p.region)
    }
}

impl From<CoreProfile> for Profile {
    fn from(p: CoreProfile) -> Self {
        Self {
            name: p.name,
            aws_access_key_id: p.aws_access_key_id,
            aws_secret_access_key: p.aws_secret_access_key,
            aws_session_token: p.aws_session_token,
            region: p.region,
        }
    }
}

// ============================================================================
// ProfilesState
// ============================================================================

#[pyclass]
pub struct ProfilesState {
    inner: CoreProfilesState,
}

#[pymethods]
impl ProfilesState {
    #[getter]
    pub fn id(&self) -> String { self.inner.id.clone() }

    #[getter]
    pub fn profiles(&self) -> Vec<Profile> {
        self.inner.profiles.iter().cloned().map(Profile::from).collect()
    }

    pub fn flattened(&self) -> Vec<HashMap<String, String>> { self.inner.flattened() }

    pub fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(data_source_err)
    }

    pub fn __len__(&self) -> usize { self.inner.profiles.len() }

    fn __repr__(&self) -> String {
        format!("ProfilesState(id='{}', profiles={})", self.inner.id, self.inner.profiles.len())
    }
}

// ============================================================================
// ProfilesDataSource
// ============================================================================

/// Credentials file data source
///
/// `path` defaults to AWS_SHARED_CREDENTIALS_FILE, the user settings file,
/// then ~/.aws/credentials. `extract_region` defaults to the settings value.
#[pyclass]
pub struct ProfilesDataSource {
    inner: CoreProfilesDataSource,
    path: PathBuf,
}

#[pymethods]
impl ProfilesDataSource {
    #[new]
    #[pyo3(signature = (path=None, extract_region=None, verbose=false))]
    pub fn new(path: Option<PathBuf>, extract_region: Option<bool>, verbose: bool) -> PyResult<Self> {
        let config = SettingsFile::user()
            .with_overrides(path.as_deref(), extract_region)
            .map_err(config_err)?;

        let path = resolve_credentials_path(path.as_deref(), &config).map_err(config_err)?;
        let source = FileProfileSource::with_options(&path, config.parse_options());
        let logger: SharedLogger = if verbose {
            Arc::new(ConsoleLogger::new())
        } else {
            Arc::new(NoOpLogger::new())
        };

        Ok(Self {
            inner: CoreProfilesDataSource::new(Arc::new(source), logger),
            path,
        })
    }

    #[getter]
    pub fn path(&self) -> String { self.path.to_string_lossy().into_owned() }

    pub fn is_available(&self) -> bool { self.inner.source().is_available() }

    /// Read the file; raises RuntimeError when it holds no profiles
    pub fn read(&self) -> PyResult<ProfilesState> {
        self.inner
            .read()
            .map(|inner| ProfilesState { inner })
            .map_err(data_source_err)
    }

    fn __repr__(&self) -> String {
        format!("ProfilesDataSource(path='{}')", self.path.display())
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Parse a credentials file, returning possibly zero profiles
#[pyfunction]
#[pyo3(signature = (path, extract_region=true))]
fn parse_profiles(path: PathBuf, extract_region: bool) -> PyResult<Vec<Profile>> {
    let parser = ProfileParser::new(ParseOptions { extract_region });
    let profiles = parser.parse_file(&path).map_err(profile_err)?;
    Ok(profiles.into_iter().map(Profile::from).collect())
}

/// ~/.aws/credentials for the current user
#[pyfunction]
fn default_credentials_path() -> PyResult<String> {
    core_default_credentials_path()
        .map(|p| p.to_string_lossy().into_owned())
        .map_err(config_err)
}

/// (name, computed, sensitive) for each profile attribute
#[pyfunction]
fn profiles_schema() -> Vec<(String, bool, bool)> {
    core_profiles_schema()
        .into_iter()
        .map(|a| (a.name.to_string(), a.computed, a.sensitive))
        .collect()
}

#[pymodule]
fn awsprofiles(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Profile>()?;
    m.add_class::<ProfilesState>()?;
    m.add_class::<ProfilesDataSource>()?;

    m.add_function(wrap_pyfunction!(parse_profiles, m)?)?;
    m.add_function(wrap_pyfunction!(default_credentials_path, m)?)?;
    m.add_function(wrap_pyfunction!(profiles_schema, m)?)?;
    m.add("PROFILES_ATTRIBUTE", PROFILES_ATTRIBUTE)?;

    Ok(())
}
