//! Logger trait definition

use std::sync::Arc;

/// Logging sink injected into a [`ProfilesDataSource`](crate::datasource::ProfilesDataSource)
///
/// Hosts plug in their own implementation (a plugin log channel, a Python
/// logger, ...). Messages carry profile names, counts and paths; secret
/// values never reach a logger.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Format and send a debug message to a [`Logger`]
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}
