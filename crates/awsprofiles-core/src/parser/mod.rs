//! Shared credentials file parser
//!
//! A single-pass line scanner over an INI-like file:
//!
//! ```text
//! [default]
//! aws_access_key_id = AKIDEXAMPLE
//! aws_secret_access_key = wJalrXUtnFEMI/K7MDENG
//!
//! [dev]
//! aws_access_key_id=AKIDDEV
//! ```
//!
//! Each `[name]` line starts a profile, recognized key lines fill it in, and
//! a blank line (or the next header, or end of input) closes it.

mod error;
mod scanner;

pub use error::{ProfileError, ProfileResult};
pub use scanner::{parse_file, parse_reader, parse_str, ParseOptions, ProfileParser};
