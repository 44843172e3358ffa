// SPDX-License-Identifier: MIT

//! Relational operators and their detection inside a condition

use crate::hackberry::error::{ConditionFault, IllegalCondition};

/// The six relational operators a condition may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// =
    Eq,
    /// !=
    NotEq,
    /// <
    Lt,
    /// <=
    Lte,
    /// >
    Gt,
    /// >=
    Gte,
}

impl Operator {
    /// Detection order. Two-character tokens come before their
    /// one-character prefixes.
    pub const DETECTION_ORDER: [Operator; 6] = [
        Operator::NotEq,
        Operator::Lte,
        Operator::Lt,
        Operator::Gte,
        Operator::Gt,
        Operator::Eq,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Find the operator of `condition` and the byte offset of its first
/// occurrence.
///
/// Candidates are tried in [`Operator::DETECTION_ORDER`]; only the first
/// occurrence of each token is considered, and it is accepted when it neither
/// starts the condition nor runs up to its last byte. The first accepted
/// candidate wins, even if another token occurs further left.
pub fn detect(condition: &str) -> Result<(Operator, usize), IllegalCondition> {
    for op in Operator::DETECTION_ORDER {
        let token = op.token();
        if let Some(index) = condition.find(token) {
            if index > 0 && index + token.len() < condition.len() {
                log::trace!(
                    "detected operator [{}] at {} in condition [{}]",
                    op,
                    index,
                    condition
                );
                return Ok((op, index));
            }
        }
    }

    Err(IllegalCondition::new(
        condition,
        ConditionFault::MissingOperator,
    ))
}
