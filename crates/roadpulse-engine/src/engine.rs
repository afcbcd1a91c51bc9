//! The rule engine orchestrator.
//!
//! [`RuleEngine::evaluate_all`] is the single entry point of an evaluation
//! pass: it loads live rules from the store, matches each one against the
//! signal context, and returns the triggered actions in deterministic
//! order (priority descending, then creation time descending). The engine
//! holds no state between passes; its output is a pure function of the
//! context and the current store contents.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use roadpulse_rules::{
    evaluate, ActionMap, AlertRule, Condition, MatchResult, Result, RulePriority, RuleStore,
    SignalContext,
};

/// An instruction for the downstream action dispatcher, produced for each
/// matched rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggeredAction {
    /// The matching rule's ID.
    pub rule_id: String,
    /// The matching rule's name.
    pub rule_name: String,
    /// The matching rule's priority.
    pub priority: RulePriority,
    /// Action payloads copied verbatim from the rule; opaque to the engine.
    pub actions: ActionMap,
    /// The conditions that matched, for explainability and logging.
    pub matched_conditions: Vec<Condition>,
}

impl TriggeredAction {
    fn from_match(rule: AlertRule, result: MatchResult) -> Self {
        Self {
            rule_id: rule.id,
            rule_name: rule.name,
            priority: rule.priority,
            actions: rule.actions,
            matched_conditions: result
                .trace
                .into_iter()
                .filter(|outcome| outcome.matched)
                .map(|outcome| outcome.condition)
                .collect(),
        }
    }
}

/// Evaluates the persisted rule set against live signals.
///
/// The engine reads the store once per pass and never writes to it;
/// concurrent passes for different locations may run fully in parallel.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    store: Arc<dyn RuleStore>,
}

impl RuleEngine {
    /// Creates an engine reading rules from the given store.
    #[must_use]
    pub fn new(store: Arc<dyn RuleStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying rule store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn RuleStore> {
        &self.store
    }

    /// Runs one evaluation pass over the given context.
    ///
    /// Rules are evaluated independently; one rule's outcome never affects
    /// another's. The returned sequence is sorted by priority descending,
    /// then creation time descending (the most recently created rule of
    /// equal priority first). Actions are never deduplicated or merged;
    /// coalescing is the dispatcher's concern.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::StoreUnavailable` (or whatever the store
    /// surfaces) when rules cannot be fetched. A fetch failure is never
    /// reported as zero matches.
    pub fn evaluate_all(&self, ctx: &SignalContext) -> Result<Vec<TriggeredAction>> {
        let rules = self.store.list()?;
        let considered = rules.len();

        let mut matches: Vec<(AlertRule, MatchResult)> = Vec::new();
        for rule in rules {
            if !rule.is_live() {
                continue;
            }

            let result = evaluate(&rule, ctx);
            debug!(
                rule_id = %rule.id,
                rule_name = %rule.name,
                matched = result.matched,
                "rule evaluated"
            );

            if result.matched {
                matches.push((rule, result));
            }
        }

        matches.sort_by(|(a, _), (b, _)| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        let triggered: Vec<TriggeredAction> = matches
            .into_iter()
            .map(|(rule, result)| TriggeredAction::from_match(rule, result))
            .collect();

        info!(
            rules_considered = considered,
            actions_triggered = triggered.len(),
            "evaluation pass complete"
        );

        Ok(triggered)
    }
}
