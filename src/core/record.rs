//! Log record structure

use super::attr::{Attr, Value};
use super::level::Level;
use chrono::{DateTime, Local};
use std::panic::Location;

/// Where a record was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub file: String,
    pub line: u32,
    pub function: Option<String>,
}

impl Source {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            function: None,
        }
    }

    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }
}

impl From<&Location<'_>> for Source {
    fn from(location: &Location<'_>) -> Self {
        Source::new(location.file(), location.line())
    }
}

/// One log event. Handlers read it by reference and never retain it.
#[derive(Debug, Clone)]
pub struct Record {
    /// `None` omits the time from encoded output
    pub time: Option<DateTime<Local>>,
    pub level: Level,
    pub message: String,
    pub attrs: Vec<Attr>,
    pub source: Option<Source>,
}

impl Record {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Some(Local::now()),
            level,
            message: message.into(),
            attrs: Vec::new(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<Local>) -> Self {
        self.time = Some(time);
        self
    }

    #[must_use]
    pub fn without_time(mut self) -> Self {
        self.time = None;
        self
    }

    #[must_use]
    pub fn with_attr<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.attrs.push(Attr::new(key, value));
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Record the location of the caller
    #[track_caller]
    #[must_use]
    pub fn with_caller(self) -> Self {
        self.with_source(Location::caller().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = Record::new(Level::WARN, "disk almost full")
            .with_attr("free_mb", 12)
            .with_attrs(vec![Attr::new("mount", "/")]);

        assert_eq!(record.level, Level::WARN);
        assert_eq!(record.message, "disk almost full");
        assert_eq!(record.attrs.len(), 2);
        assert!(record.time.is_some());
        assert!(record.source.is_none());
    }

    #[test]
    fn test_with_caller_points_here() {
        let record = Record::new(Level::INFO, "x").with_caller();
        let source = record.source.expect("source recorded");
        assert!(source.file.ends_with("record.rs"));
        assert!(source.line > 0);
    }

    #[test]
    fn test_without_time() {
        let record = Record::new(Level::INFO, "x").without_time();
        assert!(record.time.is_none());
    }
}
