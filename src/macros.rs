//! Logging macros for ergonomic title formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use service_log::prelude::*;
//! use service_log::info;
//!
//! let logger = Logger::builder("server").transport(ConsoleTransport::new()).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a record with automatic title formatting.
///
/// # Examples
///
/// ```
/// # use service_log::prelude::*;
/// # let logger = Logger::builder("server").build();
/// use service_log::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

/// Log a debug-severity record.
///
/// # Examples
///
/// ```
/// # use service_log::prelude::*;
/// # let logger = Logger::builder("server").build();
/// use service_log::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-severity record.
///
/// # Examples
///
/// ```
/// # use service_log::prelude::*;
/// # let logger = Logger::builder("server").build();
/// use service_log::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warn-severity record.
///
/// # Examples
///
/// ```
/// # use service_log::prelude::*;
/// # let logger = Logger::builder("server").build();
/// use service_log::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-severity record.
///
/// # Examples
///
/// ```
/// # use service_log::prelude::*;
/// # let logger = Logger::builder("server").build();
/// use service_log::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, Severity};

    #[test]
    fn test_log_macro() {
        let logger = Logger::builder("tests").build();
        log!(logger, Severity::Info, "Test message");
        log!(logger, Severity::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_debug_macro() {
        let logger = Logger::builder("tests").build();
        debug!(logger, "Debug message");
        debug!(logger, "Count: {}", 5);
    }

    #[test]
    fn test_info_macro() {
        let logger = Logger::builder("tests").build();
        info!(logger, "Info message");
        info!(logger, "Items: {}", 100);
    }

    #[test]
    fn test_warn_macro() {
        let logger = Logger::builder("tests").build();
        warn!(logger, "Warning message");
        warn!(logger, "Retry {} of {}", 1, 3);
    }

    #[test]
    fn test_error_macro() {
        let logger = Logger::builder("tests").build();
        error!(logger, "Error message");
        error!(logger, "Code: {}", 500);
    }
}
