// SPDX-License-Identifier: MIT

//! Condition evaluation
//!
//! A condition compares one attribute with a literal:
//! - `age >= 18`
//! - `name = foo`
//! - `flag != true`
//!
//! The literal is typed after the attribute's value in the context, so the
//! same text `18` is an integer for an integer attribute and a string for a
//! text attribute. An absent attribute never satisfies a condition.

mod compare;
mod evaluator;
mod literal;
mod operator;

pub use compare::compare;
pub use evaluator::{
    is_satisfied, split, Comparison, ConditionEvaluator, DefaultConditionEvaluator,
};
pub use literal::parse as parse_literal;
pub use operator::{detect, Operator};
