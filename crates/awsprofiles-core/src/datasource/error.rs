//! Data source error types

use thiserror::Error;

use crate::parser::ProfileError;

/// Errors surfaced to the host by a data source read
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// The underlying source failed (open, read or malformed file)
    #[error("getting Profiles: {0}")]
    Source(#[from] ProfileError),

    /// The source parsed cleanly but held no profiles
    #[error("No profiles found. Setup profiles before calling this.")]
    NoProfiles,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type DataSourceResult<T> = Result<T, DataSourceError>;
