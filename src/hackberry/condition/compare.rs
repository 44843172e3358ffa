// SPDX-License-Identifier: MIT

//! Typed comparison of an attribute value against a parsed literal

use super::operator::Operator;
use crate::hackberry::context::AttributeValue;
use crate::hackberry::error::ConditionFault;

/// Compare `attribute` with `literal` using `op`.
///
/// Both values must be of the same category. Booleans only support `=` and
/// `!=`; numbers and text support all six operators with their native
/// ordering. Float equality is exact IEEE equality.
pub fn compare(
    attribute: &AttributeValue,
    literal: &AttributeValue,
    op: Operator,
) -> Result<bool, ConditionFault> {
    match (attribute, literal) {
        (AttributeValue::Bool(a), AttributeValue::Bool(b)) => compare_bool(*a, *b, op),
        (AttributeValue::Int(a), AttributeValue::Int(b)) => Ok(compare_ordered(a, b, op)),
        (AttributeValue::Uint(a), AttributeValue::Uint(b)) => Ok(compare_ordered(a, b, op)),
        (AttributeValue::Float(a), AttributeValue::Float(b)) => Ok(compare_ordered(a, b, op)),
        (AttributeValue::Text(a), AttributeValue::Text(b)) => {
            Ok(compare_ordered(a.as_str(), b.as_str(), op))
        }
        _ => Err(ConditionFault::CategoryMismatch {
            attribute: attribute.category(),
            literal: literal.category(),
        }),
    }
}

fn compare_bool(a: bool, b: bool, op: Operator) -> Result<bool, ConditionFault> {
    match op {
        Operator::Eq => Ok(a == b),
        Operator::NotEq => Ok(a != b),
        _ => Err(ConditionFault::UnsupportedBoolOperation(op)),
    }
}

fn compare_ordered<T: PartialOrd + ?Sized>(a: &T, b: &T, op: Operator) -> bool {
    match op {
        Operator::Eq => a == b,
        Operator::NotEq => a != b,
        Operator::Lt => a < b,
        Operator::Lte => a <= b,
        Operator::Gt => a > b,
        Operator::Gte => a >= b,
    }
}
