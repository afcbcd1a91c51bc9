//! Alert rules: named, prioritized condition sets plus opaque actions.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::condition::Condition;
use crate::error::{Result, RuleError};

/// Ordinal severity used to rank simultaneously matching rules.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RulePriority {
    /// Informational advisory.
    Low,
    /// Standard advisory.
    #[default]
    Medium,
    /// Urgent advisory.
    High,
    /// Immediate-attention advisory.
    Critical,
}

impl RulePriority {
    /// Returns the priority as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Returns the rank of this priority (higher = more urgent).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }
}

impl FromStr for RulePriority {
    type Err = RuleError;

    /// Parses a priority, rejecting anything outside the enumerated set.
    /// Invalid input is an error, never coerced to a default.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(RuleError::InvalidRule {
                reason: format!(
                    "unknown priority '{other}' (expected low, medium, high, or critical)"
                ),
            }),
        }
    }
}

impl std::fmt::Display for RulePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque action payload forwarded verbatim to the action dispatcher.
pub type ActionMap = HashMap<String, serde_json::Value>;

/// A named, prioritized set of conditions plus actions used to decide
/// whether to raise an advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRule {
    /// Unique identifier, immutable once created.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Optional display description; non-semantic to evaluation.
    pub description: Option<String>,
    /// Conditions combined with logical AND. Empty means the rule never
    /// matches (deny by default).
    pub conditions: Vec<Condition>,
    /// Schema-free action payloads keyed by action kind; never inspected
    /// by the engine.
    pub actions: ActionMap,
    /// Rank among simultaneously matching rules.
    pub priority: RulePriority,
    /// User-facing on/off switch.
    pub enabled: bool,
    /// System-level kill switch, independent of `enabled`.
    pub active: bool,
    /// Creation timestamp; newest-first tie-break and default listing order.
    pub created_at: DateTime<Utc>,
}

impl AlertRule {
    /// Maximum allowed length for rule names.
    pub const MAX_NAME_LENGTH: usize = 256;

    /// Creates a new alert rule builder.
    pub fn builder(name: impl Into<String>) -> AlertRuleBuilder {
        AlertRuleBuilder::new(name)
    }

    /// Returns true if the rule participates in evaluation: both the user
    /// switch and the system kill switch are on.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.enabled && self.active
    }

    /// Validates a rule name.
    pub(crate) fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(RuleError::InvalidRule {
                reason: "rule name cannot be empty".to_string(),
            });
        }
        if name.len() > Self::MAX_NAME_LENGTH {
            return Err(RuleError::InvalidRule {
                reason: format!(
                    "rule name exceeds maximum length of {} characters",
                    Self::MAX_NAME_LENGTH
                ),
            });
        }
        Ok(())
    }
}

/// Builder for creating [`AlertRule`] instances.
#[derive(Debug)]
pub struct AlertRuleBuilder {
    name: String,
    description: Option<String>,
    conditions: Vec<Condition>,
    actions: ActionMap,
    priority: RulePriority,
    enabled: bool,
    active: bool,
    created_at: Option<DateTime<Utc>>,
}

impl AlertRuleBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            conditions: Vec::new(),
            actions: ActionMap::new(),
            priority: RulePriority::Medium,
            enabled: true,
            active: true,
            created_at: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a condition.
    #[must_use]
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Replaces the condition list.
    #[must_use]
    pub fn conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    /// Adds an action payload under the given action kind.
    #[must_use]
    pub fn action(mut self, kind: impl Into<String>, payload: serde_json::Value) -> Self {
        self.actions.insert(kind.into(), payload);
        self
    }

    /// Replaces the action map.
    #[must_use]
    pub fn actions(mut self, actions: ActionMap) -> Self {
        self.actions = actions;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn priority(mut self, priority: RulePriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the user-facing enabled switch.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the system kill switch.
    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Overrides the creation timestamp (defaults to now).
    #[must_use]
    pub const fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Builds the [`AlertRule`].
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRule` if the name is empty or exceeds
    /// the maximum length.
    pub fn build(self) -> Result<AlertRule> {
        AlertRule::validate_name(&self.name)?;

        Ok(AlertRule {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            description: self.description,
            conditions: self.conditions,
            actions: self.actions,
            priority: self.priority,
            enabled: self.enabled,
            active: self.active,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

/// An unvalidated rule submission, mirroring the administrative wire shape.
///
/// The priority arrives as a raw string so that validation can reject
/// unknown values instead of silently defaulting them; only a *missing*
/// priority gets the `medium` default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleDraft {
    /// Rule name (required).
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Conditions; defaults to empty (a no-op rule).
    pub conditions: Vec<Condition>,
    /// Action payloads; defaults to empty.
    pub actions: ActionMap,
    /// Raw priority string; `None` defaults to medium.
    pub priority: Option<String>,
    /// Optional enabled override; defaults to true.
    pub enabled: Option<bool>,
    /// Optional active override; defaults to true.
    pub active: Option<bool>,
}

impl RuleDraft {
    /// Creates a draft with the given name and all defaults.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the raw priority string.
    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Adds a condition.
    #[must_use]
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Adds an action payload.
    #[must_use]
    pub fn action(mut self, kind: impl Into<String>, payload: serde_json::Value) -> Self {
        self.actions.insert(kind.into(), payload);
        self
    }

    /// Validates the draft and turns it into a persisted rule with a fresh
    /// identifier and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRule` if the name is missing/over-long or
    /// the priority string is outside the enumerated set. Validation runs
    /// before any identifier is assigned, so a failed draft leaves no trace.
    pub fn into_rule(self) -> Result<AlertRule> {
        let priority = match self.priority.as_deref() {
            None => RulePriority::default(),
            Some(raw) => raw.parse()?,
        };

        let mut builder = AlertRule::builder(self.name)
            .conditions(self.conditions)
            .actions(self.actions)
            .priority(priority)
            .enabled(self.enabled.unwrap_or(true))
            .active(self.active.unwrap_or(true));

        if let Some(description) = self.description {
            builder = builder.description(description);
        }

        builder.build()
    }
}
