//! Configuration
//!
//! - `ProfilesConfig`: which credentials file to read and how to parse it
//! - `SettingsFile`: optional YAML settings (~/.config/awsprofiles/config.yaml)
//! - `resolve_credentials_path`: explicit path, then `AWS_SHARED_CREDENTIALS_FILE`,
//!   then settings, then `~/.aws/credentials`

mod traits;
mod file;
mod location;

pub use traits::{ConfigError, ConfigResult};
pub use file::{ProfilesConfig, SettingsFile};
pub use location::{default_credentials_path, resolve_credentials_path, CREDENTIALS_FILE_ENV};
