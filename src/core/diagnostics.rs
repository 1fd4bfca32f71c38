//! Diagnostic entries emitted by observational rules.
//!
//! Observational rules never touch state. When one matches a dispatched
//! action it produces a `DiagnosticEntry` instead: a structured record
//! of which rule fired, for which action, with a human-readable message
//! and the full action payload attached. The store forwards entries to
//! its environment's diagnostics sink after the reduction commits.

use serde::Serialize;
use serde_json::Value;

use super::action::StoreAction;

/// A single observation produced by a rule that matched an action.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiagnosticEntry {
    /// Name of the rule that produced this entry.
    pub rule: &'static str,
    /// Type name of the action that was matched.
    pub action_type: &'static str,
    /// Human-readable description of what was observed.
    pub message: String,
    /// The matched action, serialized in full.
    pub payload: Value,
}

impl DiagnosticEntry {
    /// Build an entry for a matched action.
    ///
    /// The action is serialized into the payload field. Serialization of
    /// an action is infallible for well-formed action types; if it does
    /// fail the payload degrades to `null` and the entry is still
    /// produced.
    pub fn for_action<A: StoreAction>(rule: &'static str, message: String, action: &A) -> Self {
        Self {
            rule,
            action_type: action.name(),
            message,
            payload: serde_json::to_value(action).unwrap_or(Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    enum TestAction {
        Ping { seq: u32 },
    }

    impl StoreAction for TestAction {
        type Key = u8;

        fn key(&self) -> u8 {
            0
        }

        fn name(&self) -> &'static str {
            "test/ping"
        }
    }

    #[test]
    fn entry_captures_rule_action_and_payload() {
        let action = TestAction::Ping { seq: 41 };
        let entry = DiagnosticEntry::for_action("watch-pings", "Saw a ping".to_string(), &action);

        assert_eq!(entry.rule, "watch-pings");
        assert_eq!(entry.action_type, "test/ping");
        assert_eq!(entry.message, "Saw a ping");
        assert_eq!(entry.payload, json!({ "Ping": { "seq": 41 } }));
    }

    #[test]
    fn entry_serializes_correctly() {
        let action = TestAction::Ping { seq: 1 };
        let entry = DiagnosticEntry::for_action("watch-pings", "Saw a ping".to_string(), &action);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("watch-pings"));
        assert!(json.contains("test/ping"));
    }
}
