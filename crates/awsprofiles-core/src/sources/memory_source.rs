//! In-memory profile source

use std::sync::RwLock;

use super::traits::ProfileSource;
use crate::parser::ProfileResult;
use crate::types::Profile;

/// Profile source backed by a list held in memory
///
/// # Example
///
/// ```
/// use awsprofiles_core::sources::{MemoryProfileSource, ProfileSource};
/// use awsprofiles_core::Profile;
///
/// let source = MemoryProfileSource::with_profiles(vec![Profile::new("default")]);
/// assert_eq!(source.load().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryProfileSource {
    profiles: RwLock<Vec<Profile>>,
}

impl MemoryProfileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    /// Replace the held profiles
    pub fn set_profiles(&self, profiles: Vec<Profile>) {
        let mut guard = self.profiles.write().unwrap();
        *guard = profiles;
    }

    pub fn clear(&self) {
        let mut guard = self.profiles.write().unwrap();
        guard.clear();
    }
}

impl ProfileSource for MemoryProfileSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> ProfileResult<Vec<Profile>> {
        let guard = self.profiles.read().unwrap();
        Ok(guard.clone())
    }
}
