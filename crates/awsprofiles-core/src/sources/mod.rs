//! Profile sources
//!
//! - `ProfileSource` trait for anything that can produce profiles
//! - `FileProfileSource`: a shared credentials file on disk
//! - `MemoryProfileSource`: a fixed list, for tests and embedding hosts

mod traits;
mod file_source;
mod memory_source;

pub use traits::ProfileSource;
pub use file_source::FileProfileSource;
pub use memory_source::MemoryProfileSource;
