//! The action dispatcher boundary.
//!
//! Delivery transports are out of scope for the engine: it only produces
//! [`TriggeredAction`](crate::TriggeredAction) values. [`ActionDispatcher`]
//! is the seam downstream delivery plugs into, and [`LogDispatcher`] is
//! the reference implementation, emitting each action through `tracing`.

use std::fmt;

use tracing::info;

use roadpulse_rules::Result;

use crate::engine::TriggeredAction;

/// Result of handing a batch of actions to a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// The dispatcher that processed the batch.
    pub dispatcher: String,
    /// Number of actions the dispatcher accepted.
    pub delivered: usize,
}

/// Consumes triggered actions and performs delivery.
///
/// The engine never calls a dispatcher itself; callers wire an evaluation
/// pass's output into one. Delivery success or failure is entirely the
/// dispatcher's concern and is not reported back into evaluation.
pub trait ActionDispatcher: Send + Sync + fmt::Debug {
    /// Returns the name of this dispatcher.
    fn name(&self) -> &str;

    /// Delivers a batch of triggered actions, preserving their order.
    fn dispatch(&self, batch: &[TriggeredAction]) -> Result<DispatchOutcome>;
}

/// A dispatcher that logs each action instead of delivering it.
#[derive(Debug, Clone)]
pub struct LogDispatcher {
    name: String,
}

impl LogDispatcher {
    /// Creates a log dispatcher with a custom name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for LogDispatcher {
    fn default() -> Self {
        Self::new("log")
    }
}

impl ActionDispatcher for LogDispatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn dispatch(&self, batch: &[TriggeredAction]) -> Result<DispatchOutcome> {
        for action in batch {
            info!(
                rule_id = %action.rule_id,
                rule_name = %action.rule_name,
                priority = %action.priority,
                action_kinds = action.actions.len(),
                "advisory triggered"
            );
        }

        Ok(DispatchOutcome {
            dispatcher: self.name.clone(),
            delivered: batch.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadpulse_rules::{ActionMap, RulePriority};

    fn test_action(name: &str) -> TriggeredAction {
        TriggeredAction {
            rule_id: "rule-1".to_string(),
            rule_name: name.to_string(),
            priority: RulePriority::High,
            actions: ActionMap::new(),
            matched_conditions: Vec::new(),
        }
    }

    #[test]
    fn log_dispatcher_accepts_whole_batch() {
        let dispatcher = LogDispatcher::default();
        let batch = vec![test_action("A"), test_action("B")];

        let outcome = dispatcher.dispatch(&batch).unwrap();
        assert_eq!(outcome.delivered, 2);
        assert_eq!(outcome.dispatcher, "log");
    }

    #[test]
    fn log_dispatcher_empty_batch() {
        let dispatcher = LogDispatcher::new("audit");
        let outcome = dispatcher.dispatch(&[]).unwrap();
        assert_eq!(outcome.delivered, 0);
        assert_eq!(dispatcher.name(), "audit");
    }
}
