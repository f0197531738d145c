//! Handler trait for record processing stages

use super::{attr::Attr, error::Result, level::Level, record::Record};
use std::sync::Arc;

/// A stage that turns records into output.
///
/// Derived handlers returned by `with_attrs` and `with_group` keep what the
/// parent had bound and add to it; the parent is left unchanged.
pub trait Handler: Send + Sync {
    fn enabled(&self, level: Level) -> bool;
    fn handle(&self, record: &Record) -> Result<()>;
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler>;
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;
}
