//! Shared credentials file source

use std::path::{Path, PathBuf};

use super::traits::ProfileSource;
use crate::config::{resolve_credentials_path, ConfigResult, ProfilesConfig};
use crate::parser::{ParseOptions, ProfileParser, ProfileResult};
use crate::types::Profile;

/// Profile source reading a credentials file on every `load`
///
/// # Example
///
/// ```no_run
/// use awsprofiles_core::sources::{FileProfileSource, ProfileSource};
///
/// // ~/.aws/credentials, or AWS_SHARED_CREDENTIALS_FILE when set
/// let source = FileProfileSource::default_location().unwrap();
/// let profiles = source.load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileProfileSource {
    path: PathBuf,
    parser: ProfileParser,
}

impl FileProfileSource {
    /// Read `path` with default parse options
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, ParseOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: ParseOptions) -> Self {
        Self {
            path: path.into(),
            parser: ProfileParser::new(options),
        }
    }

    /// Resolve the path and options from settings
    pub fn from_config(config: &ProfilesConfig) -> ConfigResult<Self> {
        let path = resolve_credentials_path(None, config)?;
        Ok(Self::with_options(path, config.parse_options()))
    }

    /// The standard location with default settings
    pub fn default_location() -> ConfigResult<Self> {
        Self::from_config(&ProfilesConfig::default())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> ParseOptions {
        self.parser.options()
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl ProfileSource for FileProfileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn is_available(&self) -> bool {
        self.exists()
    }

    fn load(&self) -> ProfileResult<Vec<Profile>> {
        self.parser.parse_file(&self.path)
    }
}
