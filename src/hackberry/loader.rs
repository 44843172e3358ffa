// SPDX-License-Identifier: MIT

//! Attribute loader - YAML/JSON file loading
//!
//! An attribute document is a flat mapping from attribute name to value:
//!
//! ```yaml
//! age: 20
//! name: foo
//! score: 10.5
//! beta: true
//! ```

use serde_yaml::Value;
use std::fs;
use std::path::Path;

use super::context::{Attribute, AttributeContext, AttributeValue};
use super::error::HackberryError;

/// Loads attribute contexts from YAML or JSON documents
pub struct AttributeLoader;

impl AttributeLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load attributes from a YAML or JSON file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<AttributeContext, HackberryError> {
        let path = path.as_ref();
        log::debug!("loading attributes from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse_str(&content)
    }

    /// Parse attributes from a YAML string. JSON is valid YAML, so JSON
    /// documents are accepted too. Keys with a null value are left out.
    pub fn parse_str(content: &str) -> Result<AttributeContext, HackberryError> {
        let document: Value = serde_yaml::from_str(content)?;
        let mapping = match document {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Ok(AttributeContext::new()),
            other => {
                return Err(HackberryError::config(format!(
                    "attribute document must be a mapping, found {}",
                    yaml_type_name(&other)
                )))
            }
        };

        let mut context = AttributeContext::new();
        for (key, value) in mapping {
            let name = match key {
                Value::String(name) => name,
                other => {
                    return Err(HackberryError::config(format!(
                        "attribute names must be strings, found {}",
                        yaml_type_name(&other)
                    )))
                }
            };
            if let Some(attribute) = Attribute::from_yaml(value) {
                context.insert(name, attribute);
            }
        }
        Ok(context)
    }

    /// Parse a single `name=value` override. The value is typed the way a
    /// YAML scalar would be: `20` is an integer, `true` a boolean, `foo` a
    /// string. `~` or `null` yields no value, which unsets the attribute.
    pub fn parse_assignment(
        assignment: &str,
    ) -> Result<(String, Option<Attribute>), HackberryError> {
        let (name, raw) = assignment.split_once('=').ok_or_else(|| {
            HackberryError::config(format!(
                "attribute override [{}] must have the form name=value",
                assignment
            ))
        })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(HackberryError::config(format!(
                "attribute override [{}] has an empty name",
                assignment
            )));
        }
        let raw = raw.trim();
        let attribute = if raw.is_empty() {
            Some(Attribute::Scalar(AttributeValue::Text(String::new())))
        } else {
            Attribute::from_yaml(serde_yaml::from_str(raw)?)
        };
        Ok((name.to_string(), attribute))
    }

    /// Apply `name=value` overrides to `context`. Later assignments win; a
    /// null value unsets the attribute.
    pub fn apply_overrides<S: AsRef<str>>(
        context: &mut AttributeContext,
        assignments: &[S],
    ) -> Result<(), HackberryError> {
        let mut overrides = AttributeContext::new();
        for assignment in assignments {
            match Self::parse_assignment(assignment.as_ref())? {
                (name, Some(attribute)) => {
                    log::debug!("override attribute [{}] = {:?}", name, attribute);
                    overrides.insert(name, attribute);
                }
                (name, None) => {
                    log::debug!("unset attribute [{}]", name);
                    overrides.remove(&name);
                    context.remove(&name);
                }
            }
        }
        context.merge(overrides);
        Ok(())
    }
}

impl Default for AttributeLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn yaml_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "array",
        Value::Mapping(_) => "object",
        Value::Tagged(_) => "tagged value",
    }
}
