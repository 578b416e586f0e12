//! Core types shared across the parser, sources and data source

mod profile;

pub use profile::{Profile, ProfileField};
