//! Parser error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a credentials file
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The file could not be opened (missing, unreadable, a directory, ...)
    #[error("Failed to open credentials file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O failure while scanning; nothing parsed so far is returned
    #[error("Failed to read credentials file at line {line}: {source}")]
    Read {
        line: usize,
        source: std::io::Error,
    },

    /// A key line appeared outside of any section
    #[error("Malformed credentials file: `{key}` at line {line} is not inside a [profile] section")]
    Malformed { line: usize, key: &'static str },
}

impl ProfileError {
    /// Whether the error means the file simply isn't there
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileError::Open { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display() {
        let err = ProfileError::Open {
            path: PathBuf::from("/nope/credentials"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("/nope/credentials"));
    }

    #[test]
    fn test_malformed_display() {
        let err = ProfileError::Malformed { line: 3, key: "aws_session_token" };
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Malformed credentials file: `aws_session_token` at line 3 is not inside a [profile] section"
        );
    }
}
