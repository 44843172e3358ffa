// SPDX-License-Identifier: MIT

//! Literal parsing
//!
//! The right-hand side of a condition has no type of its own. It is parsed
//! into the category of the attribute it is compared with.

use crate::hackberry::context::{AttributeValue, Category};
use crate::hackberry::error::ConditionFault;

/// Parse `text` into a value of `category`
pub fn parse(text: &str, category: Category) -> Result<AttributeValue, ConditionFault> {
    log::trace!("parsing literal [{}] as {}", text, category);

    let fail = || ConditionFault::unparsable(category, text);
    match category {
        Category::Boolean => parse_bool(text).map(AttributeValue::Bool).ok_or_else(fail),
        Category::SignedInteger => text
            .parse::<i64>()
            .map(AttributeValue::Int)
            .map_err(|_| fail()),
        Category::UnsignedInteger => parse_uint(text).map(AttributeValue::Uint).ok_or_else(fail),
        Category::Float => parse_float(text).map(AttributeValue::Float).ok_or_else(fail),
        Category::Text => Ok(AttributeValue::Text(text.to_string())),
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn parse_uint(text: &str) -> Option<u64> {
    // u64's FromStr accepts a leading '+'; unsigned literals take no sign
    if text.starts_with('+') {
        return None;
    }
    text.parse().ok()
}

fn parse_float(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;
    // f64::from_str saturates out-of-range text to +-inf instead of failing
    if value.is_infinite() && !names_infinity(text) {
        return None;
    }
    Some(value)
}

fn names_infinity(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("inf"))
}
