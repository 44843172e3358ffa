// SPDX-License-Identifier: MIT

//! Typed error handling for hackberry-rs
//!
//! `IllegalCondition` is the only error the condition core produces.
//! `HackberryError` covers the outer surfaces (attribute loading, CLI).

use thiserror::Error;

use super::condition::Operator;
use super::context::Category;

/// Top-level error type for hackberry-rs
#[derive(Debug, Error)]
pub enum HackberryError {
    /// A condition could not be evaluated
    #[error(transparent)]
    IllegalCondition(#[from] IllegalCondition),

    /// Configuration errors (malformed attribute documents, bad overrides)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl HackberryError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// A condition that is malformed, carries an unparsable literal, or asks for
/// a comparison the attribute's type does not support.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Illegal condition [{condition}]: {fault}")]
pub struct IllegalCondition {
    condition: String,
    #[source]
    fault: ConditionFault,
}

impl IllegalCondition {
    pub fn new(condition: impl Into<String>, fault: ConditionFault) -> Self {
        Self {
            condition: condition.into(),
            fault,
        }
    }

    /// The offending condition text, untrimmed
    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn fault(&self) -> &ConditionFault {
        &self.fault
    }
}

/// Why a condition is illegal
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConditionFault {
    /// None of the six operators occurs at an acceptable position
    #[error("unsupported operator")]
    MissingOperator,

    /// The literal does not parse into the attribute's category
    #[error("can't parse {category} value [{literal}]")]
    UnparsableLiteral { category: Category, literal: String },

    /// The attribute holds a value outside the five scalar categories
    #[error("unsupported value type [{0}]")]
    UnsupportedType(String),

    /// Booleans only support `=` and `!=`
    #[error("unsupported bool operation [{0}]")]
    UnsupportedBoolOperation(Operator),

    /// Comparator called with values of different categories
    #[error("can't compare {attribute} value with {literal} literal")]
    CategoryMismatch { attribute: Category, literal: Category },
}

impl ConditionFault {
    pub fn unparsable(category: Category, literal: impl Into<String>) -> Self {
        Self::UnparsableLiteral {
            category,
            literal: literal.into(),
        }
    }
}
