//! The rule repository boundary and its in-memory implementation.
//!
//! Persistent storage technology is an external collaborator; the engine
//! only depends on the [`RuleStore`] contract. [`MemoryRuleStore`] backs
//! tests and embedded deployments.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::error::{Result, RuleError};
use crate::rule::{AlertRule, RuleDraft};

/// Durable store of alert rules.
///
/// Implementations provide their own consistency guarantees; the engine
/// only reads during evaluation and never retries internally.
pub trait RuleStore: Send + Sync + fmt::Debug {
    /// Returns all rules ordered by creation time, newest first. This is
    /// the default listing contract for any administrative surface.
    fn list(&self) -> Result<Vec<AlertRule>>;

    /// Validates a draft and persists it as a new rule, assigning the
    /// identifier and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRule` if the draft lacks a name or
    /// carries a priority outside the enumerated set; a rejected draft is
    /// never partially applied.
    fn create(&self, draft: RuleDraft) -> Result<AlertRule>;

    /// Fetches a rule by ID.
    fn get(&self, id: &str) -> Result<Option<AlertRule>>;

    /// Replaces an existing rule.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::RuleNotFound` if no rule has the given ID, or
    /// `RuleError::InvalidRule` if the replacement fails validation.
    fn update(&self, rule: AlertRule) -> Result<()>;

    /// Deletes a rule by ID. Returns true if a rule was removed.
    fn delete(&self, id: &str) -> Result<bool>;
}

/// In-memory [`RuleStore`] backed by a read-write lock.
#[derive(Debug, Default)]
pub struct MemoryRuleStore {
    rules: Arc<RwLock<HashMap<String, AlertRule>>>,
}

impl MemoryRuleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    /// Returns true if the store holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}

impl Clone for MemoryRuleStore {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}

impl RuleStore for MemoryRuleStore {
    fn list(&self) -> Result<Vec<AlertRule>> {
        let rules = self.rules.read();
        let mut all: Vec<AlertRule> = rules.values().cloned().collect();
        // Newest first; id as a stable tie-break for identical timestamps.
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(all)
    }

    fn create(&self, draft: RuleDraft) -> Result<AlertRule> {
        // Validation happens before the write lock is taken; an invalid
        // draft leaves the store untouched.
        let rule = draft.into_rule()?;

        let mut rules = self.rules.write();
        info!(rule_id = %rule.id, rule_name = %rule.name, "created alert rule");
        rules.insert(rule.id.clone(), rule.clone());

        Ok(rule)
    }

    fn get(&self, id: &str) -> Result<Option<AlertRule>> {
        let rules = self.rules.read();
        Ok(rules.get(id).cloned())
    }

    fn update(&self, rule: AlertRule) -> Result<()> {
        AlertRule::validate_name(&rule.name)?;

        let mut rules = self.rules.write();
        if !rules.contains_key(&rule.id) {
            return Err(RuleError::RuleNotFound {
                id: rule.id.clone(),
            });
        }

        info!(rule_id = %rule.id, rule_name = %rule.name, "updated alert rule");
        rules.insert(rule.id.clone(), rule);

        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let mut rules = self.rules.write();
        let removed = rules.remove(id).is_some();

        if removed {
            info!(rule_id = %id, "deleted alert rule");
        }

        Ok(removed)
    }
}
