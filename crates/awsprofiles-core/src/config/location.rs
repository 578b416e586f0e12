//! Credentials file location

use std::env;
use std::path::{Path, PathBuf};

use super::file::ProfilesConfig;
use super::traits::{ConfigError, ConfigResult};

/// Environment variable overriding the credentials file path
pub const CREDENTIALS_FILE_ENV: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// `~/.aws/credentials` for the current user
pub fn default_credentials_path() -> ConfigResult<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".aws").join("credentials"))
}

/// Expand a leading `~` against the home directory
fn expand_with(path: &Path, home: Option<PathBuf>) -> ConfigResult<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = home.ok_or(ConfigError::NoHomeDir)?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}

/// Pick the credentials file to read
///
/// Precedence: `explicit`, then `AWS_SHARED_CREDENTIALS_FILE` (when
/// non-empty), then `config.credentials_file`, then `~/.aws/credentials`.
pub fn resolve_credentials_path(
    explicit: Option<&Path>,
    config: &ProfilesConfig,
) -> ConfigResult<PathBuf> {
    let from_env = env::var(CREDENTIALS_FILE_ENV).ok();
    resolve_with(explicit, from_env, config, dirs::home_dir())
}

fn resolve_with(
    explicit: Option<&Path>,
    from_env: Option<String>,
    config: &ProfilesConfig,
    home: Option<PathBuf>,
) -> ConfigResult<PathBuf> {
    let chosen = explicit
        .map(Path::to_path_buf)
        .or_else(|| from_env.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
        .or_else(|| config.credentials_file.clone());

    let path = match chosen {
        Some(path) => expand_with(&path, home)?,
        None => home
            .ok_or(ConfigError::NoHomeDir)?
            .join(".aws")
            .join("credentials"),
    };

    crate::debug_log!("Using credentials file {}", path.display());
    Ok(path)
}
