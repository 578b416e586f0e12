//! awsprofiles Core
//!
//! Runtime-agnostic reader for AWS shared credentials files.
//! This crate provides the core functionality that can be used from any host
//! (Python via PyO3, a plugin server, a native CLI, etc.)
//!
//! ## Listing profiles
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use awsprofiles_core::{ConsoleLogger, ProfilesConfig, ProfilesDataSource};
//!
//! let data_source = ProfilesDataSource::from_config(
//!     &ProfilesConfig::default(),
//!     Arc::new(ConsoleLogger::new()),
//! )?;
//!
//! let state = data_source.read()?;
//! println!("{} -> {} profile(s)", state.id, state.profiles.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod types;
pub mod logging;
pub mod config;
pub mod parser;
pub mod sources;
pub mod datasource;

// Re-export commonly used types
pub use types::{Profile, ProfileField};

pub use parser::{parse_file, parse_str, ParseOptions, ProfileError, ProfileParser, ProfileResult};

pub use logging::{ConsoleLogger, Logger, NoOpLogger, SharedLogger};

pub use config::{
    default_credentials_path, resolve_credentials_path, ConfigError, ConfigResult,
    ProfilesConfig, SettingsFile,
};

pub use sources::{FileProfileSource, MemoryProfileSource, ProfileSource};

pub use datasource::{
    flatten_profiles, id_from_profile_names, profiles_schema, AttributeSchema, DataSourceError,
    DataSourceResult, ProfilesDataSource, ProfilesState,
};
