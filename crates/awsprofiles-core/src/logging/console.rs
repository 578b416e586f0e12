//! Console logger implementation

use super::traits::Logger;

/// Writes data source messages to stderr
///
/// stdout is left alone: a host may be using it for the JSON state or for
/// its plugin protocol. Used by the Python binding when `verbose=True`.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::with_prefix("[awsprofiles]")
    }

    /// Tag lines with a host-specific prefix, e.g. the data source name
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn line(&self, level: &str, message: &str) -> String {
        format!("{} [{}] {}", self.prefix, level, message)
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        eprintln!("{}", self.line("DEBUG", message));
    }

    fn info(&self, message: &str) {
        eprintln!("{}", self.line("INFO", message));
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", self.line("WARN", message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", self.line("ERROR", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let logger = ConsoleLogger::new();
        assert_eq!(
            logger.line("DEBUG", "Reading profiles from file source"),
            "[awsprofiles] [DEBUG] Reading profiles from file source"
        );
    }

    #[test]
    fn test_custom_prefix() {
        let logger = ConsoleLogger::with_prefix("[aws_list_profiles]");
        assert!(logger.line("WARN", "x").starts_with("[aws_list_profiles] [WARN]"));
    }
}
