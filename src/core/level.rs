//! Severity levels

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Severity of a log record.
///
/// Levels are plain integers so that severities between the named ones can
/// be expressed. They display relative to the nearest named level at or
/// below them, e.g. `Level(2)` is `INFO+2` and `Level(-8)` is `DEBUG-4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Level(pub i32);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);

    /// Name of the nearest named level at or below this one, and the offset from it
    fn base(self) -> (&'static str, i32) {
        if self < Level::INFO {
            ("DEBUG", self.0 - Level::DEBUG.0)
        } else if self < Level::WARN {
            ("INFO", self.0 - Level::INFO.0)
        } else if self < Level::ERROR {
            ("WARN", self.0 - Level::WARN.0)
        } else {
            ("ERROR", self.0 - Level::ERROR.0)
        }
    }

    /// True for exactly the four named levels
    pub fn is_named(self) -> bool {
        matches!(
            self,
            Level::DEBUG | Level::INFO | Level::WARN | Level::ERROR
        )
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, offset) = self.base();
        if offset == 0 {
            f.write_str(name)
        } else {
            write!(f, "{}{:+}", name, offset)
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let (name, offset) = match upper.find(['+', '-']) {
            Some(idx) => {
                let offset = upper[idx..]
                    .parse::<i32>()
                    .map_err(|_| format!("Invalid log level offset: '{}'", s))?;
                (&upper[..idx], offset)
            }
            None => (upper.as_str(), 0),
        };

        let base = match name {
            "DEBUG" => Level::DEBUG,
            "INFO" => Level::INFO,
            "WARN" | "WARNING" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => return Err(format!("Invalid log level: '{}'", s)),
        };

        base.0
            .checked_add(offset)
            .map(Level)
            .ok_or_else(|| format!("Log level offset out of range: '{}'", s))
    }
}

impl TryFrom<String> for Level {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string()
    }
}

/// Source of a minimum level, consulted on every `enabled` check
pub trait Leveler: Send + Sync {
    fn level(&self) -> Level;
}

impl Leveler for Level {
    fn level(&self) -> Level {
        *self
    }
}

/// A minimum level that can be changed while handlers are live.
///
/// Clones share the same underlying value.
///
/// # Example
///
/// ```
/// use prettylog::{Level, LevelVar, Leveler};
///
/// let var = LevelVar::new(Level::INFO);
/// let shared = var.clone();
/// shared.set(Level::DEBUG);
/// assert_eq!(var.level(), Level::DEBUG);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LevelVar {
    level: Arc<RwLock<Level>>,
}

impl LevelVar {
    pub fn new(level: Level) -> Self {
        Self {
            level: Arc::new(RwLock::new(level)),
        }
    }

    pub fn set(&self, level: Level) {
        *self.level.write() = level;
    }
}

impl Leveler for LevelVar {
    fn level(&self) -> Level {
        *self.level.read()
    }
}
