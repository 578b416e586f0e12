//! Query surface for plugin hosts
//!
//! A host declares the `profiles` list attribute from [`profiles_schema`],
//! calls [`ProfilesDataSource::read`] once per query, and stores
//! [`ProfilesState::flattened`] under the id from [`ProfilesState::id`].

mod error;
mod profiles;
mod schema;

pub use error::{DataSourceError, DataSourceResult};
pub use profiles::{flatten_profiles, id_from_profile_names, ProfilesDataSource, ProfilesState};
pub use schema::{profiles_schema, AttributeSchema, PROFILES_ATTRIBUTE};
