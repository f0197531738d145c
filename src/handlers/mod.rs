//! Handler implementations

pub mod json;
pub mod pretty;

pub use json::JsonHandler;
pub use pretty::{PrettyHandler, TIME_FORMAT};

// Re-export the trait next to its implementations
pub use crate::core::Handler;
