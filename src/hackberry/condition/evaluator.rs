// SPDX-License-Identifier: MIT

//! Condition evaluator

use super::compare::compare;
use super::literal;
use super::operator::{detect, Operator};
use crate::hackberry::context::{Attribute, Context};
use crate::hackberry::error::{ConditionFault, IllegalCondition};

/// A condition split around its operator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison<'a> {
    /// Attribute name, trimmed
    pub name: &'a str,
    pub operator: Operator,
    /// Position of the operator token in the untrimmed condition
    pub position: usize,
    /// Literal text, trimmed
    pub literal: &'a str,
}

/// Detect the operator of `condition` and split it into name and literal.
///
/// The condition is cut at every occurrence of the operator token: the name
/// is the first piece and the literal the second, so `a = b = c` compares
/// `a` with `b`.
pub fn split(condition: &str) -> Result<Comparison<'_>, IllegalCondition> {
    let (operator, position) = detect(condition)?;
    let mut pieces = condition.split(operator.token());
    let name = pieces.next().unwrap_or_default().trim();
    let literal = pieces.next().unwrap_or_default().trim();

    Ok(Comparison {
        name,
        operator,
        position,
        literal,
    })
}

/// Decides whether a condition holds for a context
pub trait ConditionEvaluator: Send + Sync {
    /// Returns `Ok(false)` when the named attribute is absent
    fn is_satisfied(
        &self,
        condition: &str,
        context: &dyn Context,
    ) -> Result<bool, IllegalCondition>;
}

/// Evaluates `<name> <operator> <literal>` conditions, typing the literal
/// after the attribute it is compared with
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConditionEvaluator;

impl DefaultConditionEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl ConditionEvaluator for DefaultConditionEvaluator {
    fn is_satisfied(
        &self,
        condition: &str,
        context: &dyn Context,
    ) -> Result<bool, IllegalCondition> {
        let comparison = split(condition)?;

        let Some(attribute) = context.resolve(comparison.name) else {
            log::debug!(
                "attribute [{}] not found, condition [{}] not satisfied",
                comparison.name,
                condition
            );
            return Ok(false);
        };

        let satisfied = evaluate_comparison(&comparison, &attribute)
            .map_err(|fault| IllegalCondition::new(condition, fault))?;

        log::debug!("condition [{}] evaluated to {}", condition, satisfied);
        Ok(satisfied)
    }
}

fn evaluate_comparison(
    comparison: &Comparison<'_>,
    attribute: &Attribute,
) -> Result<bool, ConditionFault> {
    let value = match attribute {
        Attribute::Scalar(value) => value,
        Attribute::Unsupported(type_name) => {
            return Err(ConditionFault::UnsupportedType(type_name.clone()))
        }
    };
    let literal = literal::parse(comparison.literal, value.category())?;
    compare(value, &literal, comparison.operator)
}

/// Evaluate `condition` against `context` with the default evaluator
pub fn is_satisfied(condition: &str, context: &dyn Context) -> Result<bool, IllegalCondition> {
    DefaultConditionEvaluator.is_satisfied(condition, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hackberry::context::{AttributeContext, Category};

    fn context_with(pairs: Vec<(&str, Attribute)>) -> AttributeContext {
        let mut context = AttributeContext::new();
        for (name, attribute) in pairs {
            context.insert(name, attribute);
        }
        context
    }

    fn scalar(value: impl Into<crate::hackberry::context::AttributeValue>) -> Attribute {
        Attribute::Scalar(value.into())
    }

    #[test]
    fn test_split_trims_both_sides() {
        let comparison = split("  age   >=  18 ").unwrap();
        assert_eq!(
            comparison,
            Comparison {
                name: "age",
                operator: Operator::Gte,
                position: 8,
                literal: "18",
            }
        );
    }

    #[test]
    fn test_split_without_spaces() {
        let comparison = split("name=foo").unwrap();
        assert_eq!(comparison.name, "name");
        assert_eq!(comparison.operator, Operator::Eq);
        assert_eq!(comparison.literal, "foo");
    }

    #[test]
    fn test_split_keeps_only_second_piece() {
        let comparison = split("a = b = c").unwrap();
        assert_eq!(comparison.name, "a");
        assert_eq!(comparison.literal, "b");
    }

    #[test]
    fn test_split_missing_operator() {
        let err = split("age eighteen").unwrap_err();
        assert_eq!(err.condition(), "age eighteen");
        assert_eq!(err.fault(), &ConditionFault::MissingOperator);
    }

    #[test]
    fn test_int_comparison() {
        let context = context_with(vec![("age", scalar(20i32))]);
        assert!(is_satisfied("age >= 18", &context).unwrap());
        assert!(is_satisfied("age > 19", &context).unwrap());
        assert!(is_satisfied("age = 20", &context).unwrap());
        assert!(!is_satisfied("age < 20", &context).unwrap());
        assert!(!is_satisfied("age <= 19", &context).unwrap());
        assert!(!is_satisfied("age != 20", &context).unwrap());
    }

    #[test]
    fn test_uint_comparison() {
        let context = context_with(vec![("size", scalar(u64::MAX))]);
        assert!(is_satisfied("size = 18446744073709551615", &context).unwrap());
        assert!(is_satisfied("size > 9223372036854775807", &context).unwrap());
    }

    #[test]
    fn test_float_comparison() {
        let context = context_with(vec![("score", scalar(10.5f64))]);
        assert!(is_satisfied("score > 10", &context).unwrap());
        assert!(is_satisfied("score = 10.5", &context).unwrap());
        assert!(!is_satisfied("score < 1e1", &context).unwrap());
    }

    #[test]
    fn test_text_comparison() {
        let context = context_with(vec![("name", scalar("foo"))]);
        assert!(is_satisfied("name = foo", &context).unwrap());
        assert!(is_satisfied("name != bar", &context).unwrap());
        assert!(is_satisfied("name > bar", &context).unwrap());
        assert!(!is_satisfied("name = 'foo'", &context).unwrap());
    }

    #[test]
    fn test_bool_comparison() {
        let context = context_with(vec![("flag", scalar(false))]);
        assert!(is_satisfied("flag != true", &context).unwrap());
        assert!(is_satisfied("flag = F", &context).unwrap());
        assert!(!is_satisfied("flag = 1", &context).unwrap());
    }

    #[test]
    fn test_bool_ordering_fails() {
        let context = context_with(vec![("flag", scalar(true))]);
        let err = is_satisfied("flag >= false", &context).unwrap_err();
        assert_eq!(err.condition(), "flag >= false");
        assert_eq!(
            err.fault(),
            &ConditionFault::UnsupportedBoolOperation(Operator::Gte)
        );
    }

    #[test]
    fn test_absent_attribute_is_not_satisfied() {
        let context = AttributeContext::new();
        assert!(!is_satisfied("missing = 1", &context).unwrap());
        // the literal is never parsed when the attribute is absent
        assert!(!is_satisfied("missing >= not-a-number", &context).unwrap());
    }

    #[test]
    fn test_unparsable_literal() {
        let context = context_with(vec![("age", scalar(20i64))]);
        let err = is_satisfied("age >= eighteen", &context).unwrap_err();
        assert_eq!(
            err.fault(),
            &ConditionFault::unparsable(Category::SignedInteger, "eighteen")
        );
    }

    #[test]
    fn test_unsupported_type() {
        let context = context_with(vec![("tags", Attribute::unsupported("array"))]);
        let err = is_satisfied("tags = a", &context).unwrap_err();
        assert_eq!(
            err.fault(),
            &ConditionFault::UnsupportedType("array".to_string())
        );
        assert_eq!(err.condition(), "tags = a");
    }

    #[test]
    fn test_missing_operator_fails_even_without_attribute() {
        let context = AttributeContext::new();
        assert!(is_satisfied("missing", &context).is_err());
    }

    #[test]
    fn test_operator_inside_name_misfires() {
        // "<=" inside the name outranks the intended "=", so the name is "a"
        let context = context_with(vec![("a<=b", scalar(1i64)), ("a", scalar("alpha"))]);
        let comparison = split("a<=b = 1").unwrap();
        assert_eq!(comparison.operator, Operator::Lte);
        assert_eq!(comparison.name, "a");
        assert_eq!(comparison.literal, "b = 1");
        assert!(is_satisfied("a<=b = 1", &context).unwrap());
    }

    #[test]
    fn test_evaluator_is_object_safe() {
        let evaluator: Box<dyn ConditionEvaluator> = Box::new(DefaultConditionEvaluator::new());
        let context = context_with(vec![("age", scalar(5i64))]);
        assert!(!evaluator.is_satisfied("age >= 18", &context).unwrap());
    }
}
