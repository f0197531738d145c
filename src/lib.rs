//! # prettylog
//!
//! Colorized, human-readable console output for structured log records.
//!
//! Records are first encoded by a structured JSON handler, so attribute
//! values go through a real encoder and are never reformatted lossily. The
//! encoded object is then decoded, stripped of the keys rendered on their
//! own, and printed as:
//!
//! ```text
//! [09:30:00] INFO: hello {
//!   "k": "v"
//! }
//! ```
//!
//! ## Features
//!
//! - **Structured first**: every record passes through [`JsonHandler`]
//! - **Thread safe**: handler lineages share one scratch buffer behind a gate,
//!   and each record reaches the output in a single write
//! - **Composable**: `with_attrs`/`with_group` bind attributes and groups
//! - **`log` bridge**: route `log::info!` and friends through the same output

pub mod core;
pub mod handlers;
pub mod macros;

#[cfg(feature = "log-bridge")]
pub mod bridge;

pub mod prelude {
    pub use crate::core::{
        Attr, Handler, HandlerError, HandlerOptions, Level, LevelVar, Logger, Record, Result,
        Value,
    };
    pub use crate::handlers::{JsonHandler, PrettyHandler};
}

pub use crate::core::{
    is_reserved_key, suppress_defaults, Attr, BufferLease, Handler, HandlerError, HandlerOptions,
    Level, LevelVar, Leveler, Logger, Record, ReplaceAttr, Result, Scratch, ScratchBuffer,
    Segment, Source, Value, LEVEL_KEY, MESSAGE_KEY, SOURCE_KEY, TIME_KEY,
};
pub use handlers::{JsonHandler, PrettyHandler};

#[cfg(feature = "log-bridge")]
pub use bridge::{init, LogBridge};
