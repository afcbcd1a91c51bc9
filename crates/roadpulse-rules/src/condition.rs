//! Conditions: single predicates over named signal-context fields.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};
use crate::value::FieldValue;

/// Comparison operators for rule conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionOperator {
    /// Structural equality.
    Eq,
    /// Structural inequality.
    Neq,
    /// Numeric less-than.
    Lt,
    /// Numeric less-than-or-equal.
    Lte,
    /// Numeric greater-than.
    Gt,
    /// Numeric greater-than-or-equal.
    Gte,
    /// Membership of the resolved value in the operand list.
    In,
    /// Substring or element membership in the resolved value.
    Contains,
}

impl ConditionOperator {
    /// Returns the operator as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::In => "in",
            Self::Contains => "contains",
        }
    }

    /// Applies the operator to a resolved context value and an operand.
    ///
    /// Application fails closed: a type mismatch (ordering on text,
    /// membership in a scalar) is simply false, never an error.
    #[must_use]
    pub fn apply(&self, resolved: &FieldValue, operand: &FieldValue) -> bool {
        match self {
            Self::Eq => resolved.equals(operand),
            Self::Neq => !resolved.equals(operand),
            Self::Lt | Self::Lte | Self::Gt | Self::Gte => {
                match (resolved.as_number(), operand.as_number()) {
                    (Some(left), Some(right)) => self.compare(left, right),
                    _ => false,
                }
            }
            Self::In => match operand {
                FieldValue::List(items) => items.iter().any(|item| resolved.equals(item)),
                _ => false,
            },
            Self::Contains => match (resolved, operand) {
                (FieldValue::Text(haystack), FieldValue::Text(needle)) => {
                    haystack.contains(needle.as_str())
                }
                (FieldValue::List(items), needle) => {
                    items.iter().any(|item| item.equals(needle))
                }
                _ => false,
            },
        }
    }

    /// Numeric comparison for the ordering operators.
    fn compare(self, left: f64, right: f64) -> bool {
        match self {
            Self::Lt => left < right,
            Self::Lte => left <= right,
            Self::Gt => left > right,
            Self::Gte => left >= right,
            // Non-ordering operators never reach here.
            _ => false,
        }
    }
}

impl std::fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single predicate over a named field of the signal context.
///
/// All conditions within a rule combine with logical AND; there is no OR
/// within a single rule. Callers express OR by creating multiple rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Dotted path into the signal context, e.g. `weather.visibilityKm`.
    pub field: String,
    /// The comparison operator.
    pub operator: ConditionOperator,
    /// The operand, typed consistently with the field.
    pub value: FieldValue,
}

impl Condition {
    /// Creates a new condition.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRule` if the field path is empty.
    pub fn new(
        field: impl Into<String>,
        operator: ConditionOperator,
        value: impl Into<FieldValue>,
    ) -> Result<Self> {
        let field = field.into();
        if field.is_empty() {
            return Err(RuleError::InvalidRule {
                reason: "condition field cannot be empty".to_string(),
            });
        }

        Ok(Self {
            field,
            operator,
            value: value.into(),
        })
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}
