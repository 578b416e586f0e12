//! Profile source trait

use crate::parser::ProfileResult;
use crate::types::Profile;

/// Something that yields the current list of profiles
///
/// `load` is called once per query and must not cache: a host expects
/// edits to the credentials file to show up on the next read.
pub trait ProfileSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Whether the source can be read at all right now
    fn is_available(&self) -> bool {
        true
    }

    /// Read every profile, in source order
    fn load(&self) -> ProfileResult<Vec<Profile>>;
}
