//! Logger front-end over a handler

use super::{
    attr::Attr, error::Result, handler::Handler, level::Level, options::HandlerOptions,
    record::Record,
};
use crate::handlers::PrettyHandler;
use std::sync::Arc;

/// Cheap-to-clone entry point that builds records and hands them to a handler.
///
/// Handler failures are reported on stderr; use [`Logger::log_record`] to
/// receive them instead.
///
/// # Example
///
/// ```
/// use prettylog::{Attr, HandlerOptions, Level, Logger};
///
/// let logger = Logger::pretty(HandlerOptions::default().with_level(Level::DEBUG))
///     .with(vec![Attr::new("service", "api")]);
///
/// logger.info("Server started");
/// logger.log(Level::WARN, "Slow request", vec![Attr::new("ms", 950)]);
/// ```
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    #[must_use]
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    /// Logger rendering to standard output through a [`PrettyHandler`]
    #[must_use]
    pub fn pretty(options: HandlerOptions) -> Self {
        Self::new(Arc::new(PrettyHandler::new(options)))
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Logger whose records all carry `attrs`
    #[must_use]
    pub fn with(&self, attrs: Vec<Attr>) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }
        Self::new(self.handler.with_attrs(attrs))
    }

    /// Logger whose later attributes nest under `name`
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }
        Self::new(self.handler.with_group(name))
    }

    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>, attrs: Vec<Attr>) {
        if !self.handler.enabled(level) {
            return;
        }

        let record = Record::new(level, message).with_attrs(attrs).with_caller();
        if let Err(e) = self.handler.handle(&record) {
            eprintln!("[PRETTYLOG ERROR] Failed to handle record: {}", e);
        }
    }

    /// Hand a prepared record to the handler, skipping the level check
    pub fn log_record(&self, record: &Record) -> Result<()> {
        self.handler.handle(record)
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::DEBUG, message, Vec::new());
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::INFO, message, Vec::new());
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::WARN, message, Vec::new());
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::ERROR, message, Vec::new());
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::pretty(HandlerOptions::default())
    }
}
