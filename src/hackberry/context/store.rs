// SPDX-License-Identifier: MIT

//! In-memory attribute storage

use serde_json::{Map, Value};
use std::collections::HashMap;

use super::value::{Attribute, AttributeValue};
use super::Context;

/// Named attributes held in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeContext {
    attributes: HashMap<String, Attribute>,
}

impl AttributeContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON object, one attribute per non-null key
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        let attributes = object
            .into_iter()
            .filter_map(|(name, value)| Attribute::from_json(value).map(|a| (name, a)))
            .collect();
        Self { attributes }
    }

    /// Set a scalar attribute, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes
            .insert(name.into(), Attribute::Scalar(value.into()));
    }

    /// Insert an attribute as is
    pub fn insert(&mut self, name: impl Into<String>, attribute: Attribute) {
        self.attributes.insert(name.into(), attribute);
    }

    pub fn remove(&mut self, name: &str) -> Option<Attribute> {
        self.attributes.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Copy every attribute of `other` into this context, overwriting
    /// attributes with the same name
    pub fn merge(&mut self, other: AttributeContext) {
        self.attributes.extend(other.attributes);
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get all attribute names
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.attributes.keys()
    }
}

impl Context for AttributeContext {
    fn resolve(&self, name: &str) -> Option<Attribute> {
        self.attributes.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for AttributeContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (name, value) in iter {
            context.set(name, value);
        }
        context
    }
}
