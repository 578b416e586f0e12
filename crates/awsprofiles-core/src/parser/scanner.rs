//! Line scanner turning credentials file text into profiles

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{ProfileError, ProfileResult};
use crate::types::{Profile, ProfileField};

/// Brackets stripped from a header line to get the profile name
static SECTION_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[|\]").unwrap());

static ACCESS_KEY_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"aws_access_key_id\s*=\s*").unwrap());
static SECRET_ACCESS_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"aws_secret_access_key\s*=\s*").unwrap());
static SESSION_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"aws_session_token\s*=\s*").unwrap());

/// `region` is a common word, so unlike the `aws_*` markers it only counts
/// when it is the key of the line.
static REGION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*region\s*=").unwrap());
static REGION: Lazy<Regex> = Lazy::new(|| Regex::new(r"region\s*=\s*").unwrap());

/// Options controlling which keys the scanner extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Fill `Profile::region` from `region = ...` lines.
    ///
    /// When off, region is always empty.
    #[serde(default = "default_extract_region")]
    pub extract_region: bool,
}

fn default_extract_region() -> bool {
    true
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            extract_region: default_extract_region(),
        }
    }
}

/// What a single line means to the scanner
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Header(String),
    Key(ProfileField, String),
    Blank,
    Other,
}

fn strip_marker(pattern: &Regex, line: &str) -> String {
    pattern.replace_all(line, "").into_owned()
}

/// Drop a trailing `\n` or `\r\n`
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn classify(line: &str, options: ParseOptions) -> Line {
    // First match wins; a header check comes before any key marker.
    if line.contains('[') {
        Line::Header(strip_marker(&SECTION_BRACKETS, line))
    } else if line.contains("aws_access_key_id") {
        Line::Key(ProfileField::AccessKeyId, strip_marker(&ACCESS_KEY_ID, line))
    } else if line.contains("aws_secret_access_key") {
        Line::Key(ProfileField::SecretAccessKey, strip_marker(&SECRET_ACCESS_KEY, line))
    } else if line.contains("aws_session_token") {
        Line::Key(ProfileField::SessionToken, strip_marker(&SESSION_TOKEN, line))
    } else if options.extract_region && REGION_LINE.is_match(line) {
        Line::Key(ProfileField::Region, strip_marker(&REGION, line))
    } else if line.is_empty() {
        Line::Blank
    } else {
        Line::Other
    }
}

/// The profile currently being accumulated, if any
#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Idle,
    InProgress(Profile),
}

impl ScanState {
    /// Close the current profile (if any) into `out` and go idle
    fn finalize(&mut self, out: &mut Vec<Profile>) {
        if let ScanState::InProgress(profile) = std::mem::take(self) {
            out.push(profile);
        }
    }

    fn is_idle(&self) -> bool {
        matches!(self, ScanState::Idle)
    }

    /// Close the current profile and open a new one
    fn start(&mut self, name: String, out: &mut Vec<Profile>) {
        self.finalize(out);
        *self = ScanState::InProgress(Profile::new(name));
    }

    /// Assign a key to the open profile
    fn assign(&mut self, field: ProfileField, value: String, line: usize) -> ProfileResult<()> {
        match self {
            ScanState::InProgress(profile) => {
                profile.set(field, value);
                Ok(())
            }
            ScanState::Idle => Err(ProfileError::Malformed {
                line,
                key: field.key(),
            }),
        }
    }
}

/// Credentials file parser
///
/// Holds only options; every call re-reads its input from scratch.
///
/// # Example
///
/// ```
/// use awsprofiles_core::parser::{ProfileParser, ParseOptions};
///
/// let parser = ProfileParser::new(ParseOptions::default());
/// let profiles = parser.parse_str("[default]\naws_access_key_id = AKID\n").unwrap();
/// assert_eq!(profiles[0].name, "default");
/// assert_eq!(profiles[0].aws_access_key_id, "AKID");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileParser {
    options: ParseOptions,
}

impl ProfileParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Open and scan the file at `path`
    ///
    /// The handle is dropped before returning, on success and on error.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> ProfileResult<Vec<Profile>> {
        let path = path.as_ref();
        crate::debug_log!("Reading profiles from {}", path.display());

        let file = File::open(path).map_err(|source| ProfileError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let profiles = self.parse_reader(BufReader::new(file))?;
        crate::debug_log!("Parsed {} profile(s) from {}", profiles.len(), path.display());
        Ok(profiles)
    }

    /// Scan any buffered reader
    ///
    /// Bytes that aren't valid UTF-8 are replaced, not rejected; only a real
    /// I/O failure aborts, and it discards everything parsed so far.
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> ProfileResult<Vec<Profile>> {
        let mut profiles = Vec::new();
        let mut state = ScanState::Idle;
        let mut buf = Vec::new();
        let mut number = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| ProfileError::Read {
                    line: number + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            number += 1;

            let line = String::from_utf8_lossy(trim_line_ending(&buf));
            match classify(&line, self.options) {
                Line::Header(name) => state.start(name, &mut profiles),
                Line::Key(ProfileField::Region, _) if state.is_idle() => {
                    crate::trace_log!("Skipping region outside a profile at line {}", number)
                }
                Line::Key(field, value) => state.assign(field, value, number)?,
                Line::Blank => state.finalize(&mut profiles),
                Line::Other => crate::trace_log!("Skipping line {}", number),
            }
        }
        state.finalize(&mut profiles);

        crate::debug_log!("Scanned {} line(s) into {} profile(s)", number, profiles.len());
        Ok(profiles)
    }

    /// Scan an in-memory string
    pub fn parse_str(&self, content: &str) -> ProfileResult<Vec<Profile>> {
        self.parse_reader(content.as_bytes())
    }
}

/// Parse the file at `path` with default options
pub fn parse_file(path: impl AsRef<Path>) -> ProfileResult<Vec<Profile>> {
    ProfileParser::default().parse_file(path)
}

/// Parse a buffered reader with default options
pub fn parse_reader<R: BufRead>(reader: R) -> ProfileResult<Vec<Profile>> {
    ProfileParser::default().parse_reader(reader)
}

/// Parse a string with default options
pub fn parse_str(content: &str) -> ProfileResult<Vec<Profile>> {
    ProfileParser::default().parse_str(content)
}
