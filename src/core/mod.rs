//! Core types and traits

pub mod attr;
pub mod buffer;
pub mod error;
pub mod handler;
pub mod level;
pub mod logger;
pub mod options;
pub mod palette;
pub mod record;
pub mod suppress;

pub use attr::{Attr, Value};
pub use buffer::{BufferLease, Scratch, ScratchBuffer};
pub use error::{HandlerError, Result};
pub use handler::Handler;
pub use level::{Level, LevelVar, Leveler};
pub use logger::Logger;
pub use options::{
    HandlerOptions, ReplaceAttr, ADD_SOURCE_ENV, LEVEL_ENV, LEVEL_KEY, MESSAGE_KEY, SOURCE_KEY,
    TIME_KEY,
};
pub use palette::Segment;
pub use record::{Record, Source};
pub use suppress::{is_reserved_key, suppress_defaults};
