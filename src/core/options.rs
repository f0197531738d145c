//! Construction options for handlers

use super::{
    attr::Attr,
    error::{HandlerError, Result},
    level::{Level, LevelVar, Leveler},
};
use std::fmt;
use std::sync::Arc;

/// Key of the built-in record time
pub const TIME_KEY: &str = "time";
/// Key of the built-in record level
pub const LEVEL_KEY: &str = "level";
/// Key of the built-in record message
pub const MESSAGE_KEY: &str = "msg";
/// Key of the built-in source location
pub const SOURCE_KEY: &str = "source";

/// Environment variable holding the minimum level, e.g. `debug` or `INFO+2`
pub const LEVEL_ENV: &str = "PRETTYLOG_LEVEL";
/// Environment variable enabling source locations (`1`/`true`)
pub const ADD_SOURCE_ENV: &str = "PRETTYLOG_ADD_SOURCE";

/// Attribute rewrite hook.
///
/// Called with the enclosing group names and the attribute; returning `None`
/// drops the attribute. Never called for group attributes themselves, only
/// for their members.
pub type ReplaceAttr = Arc<dyn Fn(&[String], Attr) -> Option<Attr> + Send + Sync>;

/// Options shared by the JSON and pretty handlers
///
/// # Example
///
/// ```
/// use prettylog::{HandlerOptions, Level};
///
/// let options = HandlerOptions::default()
///     .with_level(Level::DEBUG)
///     .with_add_source(true);
/// assert_eq!(options.min_level(), Level::DEBUG);
/// ```
#[derive(Clone, Default)]
pub struct HandlerOptions {
    /// Emit the record's source location under `source`
    pub add_source: bool,

    /// Minimum level; `INFO` when unset
    pub level: Option<Arc<dyn Leveler>>,

    /// Optional attribute rewrite
    pub replace_attr: Option<ReplaceAttr>,
}

impl HandlerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from `PRETTYLOG_LEVEL` and `PRETTYLOG_ADD_SOURCE`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HandlerOptions::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(raw) = lookup(LEVEL_ENV) {
            let level = raw
                .parse::<Level>()
                .map_err(|e| HandlerError::config(LEVEL_ENV, e))?;
            options = options.with_level(level);
        }

        if let Some(raw) = lookup(ADD_SOURCE_ENV) {
            options.add_source = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    return Err(HandlerError::config(
                        ADD_SOURCE_ENV,
                        format!("expected a boolean, got '{}'", other),
                    ))
                }
            };
        }

        Ok(options)
    }

    #[must_use]
    pub fn with_add_source(mut self, add_source: bool) -> Self {
        self.add_source = add_source;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(Arc::new(level));
        self
    }

    /// Use a level that can be changed after construction
    #[must_use]
    pub fn with_level_var(mut self, level: LevelVar) -> Self {
        self.level = Some(Arc::new(level));
        self
    }

    #[must_use]
    pub fn with_replace_attr<F>(mut self, replace: F) -> Self
    where
        F: Fn(&[String], Attr) -> Option<Attr> + Send + Sync + 'static,
    {
        self.replace_attr = Some(Arc::new(replace));
        self
    }

    /// Current minimum level
    pub fn min_level(&self) -> Level {
        self.level.as_ref().map_or(Level::INFO, |l| l.level())
    }
}

impl fmt::Debug for HandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOptions")
            .field("add_source", &self.add_source)
            .field("level", &self.min_level())
            .field("replace_attr", &self.replace_attr.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let options = HandlerOptions::default();
        assert!(!options.add_source);
        assert_eq!(options.min_level(), Level::INFO);
        assert!(options.replace_attr.is_none());
    }

    #[test]
    fn test_level_var_is_live() {
        let var = LevelVar::new(Level::WARN);
        let options = HandlerOptions::new().with_level_var(var.clone());
        assert_eq!(options.min_level(), Level::WARN);

        var.set(Level::DEBUG);
        assert_eq!(options.min_level(), Level::DEBUG);
    }

    #[test]
    fn test_from_lookup() {
        let options =
            HandlerOptions::from_lookup(lookup(&[(LEVEL_ENV, "debug"), (ADD_SOURCE_ENV, "1")]))
                .unwrap();
        assert_eq!(options.min_level(), Level::DEBUG);
        assert!(options.add_source);

        let options = HandlerOptions::from_lookup(lookup(&[])).unwrap();
        assert_eq!(options.min_level(), Level::INFO);
        assert!(!options.add_source);
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let err = HandlerOptions::from_lookup(lookup(&[(LEVEL_ENV, "loud")])).unwrap_err();
        assert!(matches!(err, HandlerError::Config { .. }));

        let err = HandlerOptions::from_lookup(lookup(&[(ADD_SOURCE_ENV, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(ADD_SOURCE_ENV));
    }
}
