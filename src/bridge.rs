//! Bridge from the `log` facade
//!
//! Lets libraries that log through `log::info!` and friends render through a
//! [`PrettyHandler`].

use crate::core::{HandlerError, HandlerOptions, Level, Logger, Record, Result, Source};
use crate::handlers::PrettyHandler;
use std::sync::Arc;

/// `log::Level::Trace` has no named counterpart and renders as `DEBUG-4`
pub const TRACE: Level = Level(Level::DEBUG.0 - 4);

pub fn level_from_log(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARN,
        log::Level::Info => Level::INFO,
        log::Level::Debug => Level::DEBUG,
        log::Level::Trace => TRACE,
    }
}

/// [`log::Log`] implementation forwarding to a [`Logger`]
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    fn to_record(record: &log::Record<'_>) -> Record {
        let mut converted = Record::new(level_from_log(record.level()), record.args().to_string())
            .with_attr("target", record.target());

        if let (Some(file), Some(line)) = (record.file(), record.line()) {
            let mut source = Source::new(file, line);
            if let Some(module) = record.module_path() {
                source = source.with_function(module);
            }
            converted = converted.with_source(source);
        }
        converted
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.logger.enabled(level_from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Err(e) = self.logger.log_record(&Self::to_record(record)) {
            eprintln!("[PRETTYLOG ERROR] Failed to handle record: {}", e);
        }
    }

    fn flush(&self) {}
}

/// Install a [`PrettyHandler`] writing to stdout as the global `log` logger.
///
/// Level filtering is left to the handler, so a [`LevelVar`](crate::LevelVar)
/// in `options` keeps working after installation.
pub fn init(options: HandlerOptions) -> Result<()> {
    let logger = Logger::new(Arc::new(PrettyHandler::new(options)));
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))
        .map_err(|e| HandlerError::config("log", e.to_string()))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
