//! Removal of attributes the pretty handler renders on its own

use super::{
    attr::Attr,
    options::{ReplaceAttr, LEVEL_KEY, MESSAGE_KEY, TIME_KEY},
};
use std::sync::Arc;

/// True for keys that duplicate the rendered time, level or message
pub fn is_reserved_key(key: &str) -> bool {
    key == TIME_KEY || key == LEVEL_KEY || key == MESSAGE_KEY
}

/// Wrap `next` so that reserved keys are dropped before it ever sees them.
///
/// Whatever `next` returns is checked again, so a rewrite cannot reintroduce
/// a reserved key. The key check ignores the group path, so a nested `msg`
/// is dropped too.
pub fn suppress_defaults(next: Option<ReplaceAttr>) -> ReplaceAttr {
    match next {
        None => Arc::new(|_groups: &[String], attr: Attr| {
            if is_reserved_key(&attr.key) {
                None
            } else {
                Some(attr)
            }
        }),
        Some(next) => Arc::new(move |groups: &[String], attr: Attr| {
            if is_reserved_key(&attr.key) {
                None
            } else {
                next(groups, attr).filter(|attr| !is_reserved_key(&attr.key))
            }
        }),
    }
}
