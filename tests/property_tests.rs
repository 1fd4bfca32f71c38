//! Property-based tests for the counter's pure reduction layer.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::Utc;
use proptest::prelude::*;
use tallyset::core::{Journal, JournalEntry, Lifecycle, Phase, RequestId};
use tallyset::counter::{counter_rules, Action, CounterState, OpFailure};

fn fulfilled_increment(amount: i64) -> Action {
    Action::IncrementAsync {
        request_id: RequestId::new(),
        event: Lifecycle::Fulfilled(amount),
    }
}

fn rejected_increment() -> Action {
    Action::IncrementAsync {
        request_id: RequestId::new(),
        event: Lifecycle::Rejected(OpFailure::random_math()),
    }
}

prop_compose! {
    fn arbitrary_action()(variant in 0..7u8, amount in any::<i64>()) -> Action {
        match variant {
            0 => Action::Decrement,
            1 => Action::IncrementByAmount { amount },
            2 => Action::ManualIncrement { amount },
            3 => Action::IncrementAsync {
                request_id: RequestId::new(),
                event: Lifecycle::Pending,
            },
            4 => fulfilled_increment(amount),
            5 => rejected_increment(),
            _ => Action::AnotherAsyncOperation {
                request_id: RequestId::new(),
                event: Lifecycle::Fulfilled("Hi!".to_string()),
            },
        }
    }
}

prop_compose! {
    fn arbitrary_greeting_event()(variant in 0..3u8) -> Lifecycle<String, OpFailure> {
        match variant {
            0 => Lifecycle::Pending,
            1 => Lifecycle::Fulfilled("Hi!".to_string()),
            _ => Lifecycle::Rejected(OpFailure::random_math()),
        }
    }
}

proptest! {
    #[test]
    fn increment_by_amount_changes_value_exactly(value in any::<i64>(), amount in any::<i64>()) {
        let rules = counter_rules();
        let step = rules.apply(
            CounterState::new(value),
            &Action::IncrementByAmount { amount },
        );
        prop_assert_eq!(step.next.value, value.wrapping_add(amount));
    }

    #[test]
    fn manual_increment_equals_fulfilled_async(value in any::<i64>(), amount in any::<i64>()) {
        let rules = counter_rules();
        let manual = rules.apply(
            CounterState::new(value),
            &Action::ManualIncrement { amount },
        );
        let fulfilled = rules.apply(CounterState::new(value), &fulfilled_increment(amount));
        prop_assert_eq!(manual.next, fulfilled.next);
    }

    #[test]
    fn increment_one_undoes_decrement(value in any::<i64>()) {
        let rules = counter_rules();
        let step = rules.apply(CounterState::new(value), &Action::Decrement);
        let step = rules.apply(step.next, &Action::IncrementByAmount { amount: 1 });
        prop_assert_eq!(step.next.value, value);
    }

    #[test]
    fn rejected_increment_never_changes_value(value in any::<i64>()) {
        let rules = counter_rules();
        let step = rules.apply(CounterState::new(value), &rejected_increment());
        prop_assert_eq!(step.next.value, value);
        prop_assert_eq!(step.diagnostics.len(), 2);
    }

    #[test]
    fn pending_events_never_change_value(value in any::<i64>()) {
        let rules = counter_rules();

        let pending = Action::IncrementAsync {
            request_id: RequestId::new(),
            event: Lifecycle::Pending,
        };
        let step = rules.apply(CounterState::new(value), &pending);
        prop_assert_eq!(step.next.value, value);

        let pending = Action::AnotherAsyncOperation {
            request_id: RequestId::new(),
            event: Lifecycle::Pending,
        };
        let step = rules.apply(CounterState::new(value), &pending);
        prop_assert_eq!(step.next.value, value);
    }

    #[test]
    fn greeting_lifecycle_is_observation_only(
        value in any::<i64>(),
        event in arbitrary_greeting_event(),
    ) {
        let rules = counter_rules();
        let action = Action::AnotherAsyncOperation {
            request_id: RequestId::new(),
            event,
        };

        let step = rules.apply(CounterState::new(value), &action);
        prop_assert_eq!(step.next.value, value);
        prop_assert_eq!(step.diagnostics.len(), 1);
        prop_assert_eq!(step.diagnostics[0].rule, "lifecycle-log");
    }

    #[test]
    fn apply_is_deterministic(value in any::<i64>(), action in arbitrary_action()) {
        let rules = counter_rules();
        let first = rules.apply(CounterState::new(value), &action);
        let second = rules.apply(CounterState::new(value), &action);
        prop_assert_eq!(first.next, second.next);
        prop_assert_eq!(first.diagnostics, second.diagnostics);
    }

    #[test]
    fn rejection_diagnostics_keep_declaration_order(value in any::<i64>()) {
        let rules = counter_rules();
        let step = rules.apply(CounterState::new(value), &rejected_increment());

        let fired: Vec<&str> = step.diagnostics.iter().map(|e| e.rule).collect();
        prop_assert_eq!(fired, vec!["rejection-log", "lifecycle-log"]);
    }

    #[test]
    fn journal_preserves_dispatch_order(
        amounts in prop::collection::vec(any::<i64>(), 1..10)
    ) {
        let rules = counter_rules();
        let mut journal = Journal::new();
        let mut state = CounterState::default();

        let mut running = 0i64;
        let mut expected = vec![0i64];
        for amount in &amounts {
            running = running.wrapping_add(*amount);
            expected.push(running);
        }

        for amount in &amounts {
            let action = Action::IncrementByAmount { amount: *amount };
            let step = rules.apply(state, &action);
            journal = journal.record(JournalEntry {
                action,
                before: state,
                after: step.next,
                timestamp: Utc::now(),
            });
            state = step.next;
        }

        prop_assert_eq!(journal.entries().len(), amounts.len());

        let values: Vec<i64> = journal.states().iter().map(|s| s.value).collect();
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn action_roundtrip_serialization(action in arbitrary_action()) {
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(action, deserialized);
    }

    #[test]
    fn routing_key_ignores_payload(amount in any::<i64>(), other in any::<i64>()) {
        use tallyset::core::StoreAction;

        prop_assert_eq!(
            Action::IncrementByAmount { amount }.key(),
            Action::IncrementByAmount { amount: other }.key()
        );
        prop_assert_eq!(
            fulfilled_increment(amount).key(),
            fulfilled_increment(other).key()
        );
        prop_assert_ne!(
            fulfilled_increment(amount).key(),
            rejected_increment().key()
        );
    }

    #[test]
    fn lifecycle_phase_matches_event_shape(amount in any::<i64>()) {
        prop_assert_eq!(fulfilled_increment(amount).phase(), Some(Phase::Fulfilled));
        prop_assert_eq!(rejected_increment().phase(), Some(Phase::Rejected));
        prop_assert_eq!(Action::Decrement.phase(), None);
    }
}
