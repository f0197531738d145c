//! Logging macros for ergonomic record construction.
//!
//! Each macro takes a [`Logger`](crate::Logger) and either `format!`-style
//! arguments, or a message followed by `;` and `key => value` attributes.
//!
//! # Examples
//!
//! ```
//! use prettylog::prelude::*;
//! use prettylog::info;
//!
//! let logger = Logger::default();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With attributes
//! info!(logger, "Request served"; "status" => 200, "path" => "/health");
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use prettylog::prelude::*;
/// # let logger = Logger::default();
/// use prettylog::log;
/// log!(logger, Level::INFO, "Simple message");
/// log!(logger, Level::ERROR, "Error code: {}", 500);
/// log!(logger, Level(2), "Between info and warn"; "retries" => 3);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr; $($key:expr => $value:expr),+ $(,)?) => {
        $logger.log($level, $msg, vec![$($crate::Attr::new($key, $value)),+])
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), ::std::vec::Vec::new())
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use prettylog::prelude::*;
/// # let logger = Logger::pretty(HandlerOptions::default().with_level(Level::DEBUG));
/// use prettylog::debug;
/// debug!(logger, "Entering function: calculate()");
/// debug!(logger, "Cache state"; "hits" => 10, "misses" => 2);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use prettylog::prelude::*;
/// # let logger = Logger::default();
/// use prettylog::info;
/// info!(logger, "Application started");
/// info!(logger, "User {} logged in", "alice");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use prettylog::prelude::*;
/// # let logger = Logger::default();
/// use prettylog::warn;
/// warn!(logger, "Deprecated API called"; "endpoint" => "/v1/users");
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::WARN, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use prettylog::prelude::*;
/// # let logger = Logger::default();
/// use prettylog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Request failed"; "status" => 503, "retry" => true);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::ERROR, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Attr, Handler, Level, Logger, Record, Result};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<Record>>>);

    impl Handler for Recorder {
        fn enabled(&self, _level: Level) -> bool {
            true
        }

        fn handle(&self, record: &Record) -> Result<()> {
            self.0.lock().push(record.clone());
            Ok(())
        }

        fn with_attrs(&self, _attrs: Vec<Attr>) -> Arc<dyn Handler> {
            Arc::new(self.clone())
        }

        fn with_group(&self, _name: &str) -> Arc<dyn Handler> {
            Arc::new(self.clone())
        }
    }

    #[test]
    fn test_format_and_attr_forms() {
        let recorder = Recorder::default();
        let logger = Logger::new(Arc::new(recorder.clone()));

        crate::info!(logger, "port {}", 8080);
        crate::warn!(logger, "slow"; "ms" => 950, "path" => "/");
        crate::error!(logger, "plain");

        let records = recorder.0.lock();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].message, "port 8080");
        assert!(records[0].attrs.is_empty());
        assert_eq!(records[1].level, Level::WARN);
        assert_eq!(
            records[1].attrs,
            vec![Attr::new("ms", 950), Attr::new("path", "/")]
        );
        assert_eq!(records[2].level, Level::ERROR);
    }
}
