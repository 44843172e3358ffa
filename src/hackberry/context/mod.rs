// SPDX-License-Identifier: MIT

//! Attribute contexts
//!
//! This module provides:
//! - `Context` - the lookup capability a condition is evaluated against
//! - `AttributeValue` - the five scalar categories conditions compare
//! - `AttributeContext` - an in-memory context

mod store;
mod value;

use std::collections::HashMap;

pub use store::AttributeContext;
pub use value::{Attribute, AttributeValue, Category};

/// Resolves attribute names to values.
///
/// Implementations shared between threads must allow concurrent reads;
/// evaluation never mutates a context.
pub trait Context: Send + Sync {
    /// Returns the attribute stored under `name`, or `None` if absent
    fn resolve(&self, name: &str) -> Option<Attribute>;
}

impl Context for HashMap<String, AttributeValue> {
    fn resolve(&self, name: &str) -> Option<Attribute> {
        self.get(name).cloned().map(Attribute::Scalar)
    }
}
