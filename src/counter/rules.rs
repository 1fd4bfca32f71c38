//! The counter's rule set.
//!
//! Wires the counter's case handlers and matcher rules into one
//! [`RuleSet`]. Case handlers cover the two plain synchronous actions.
//! Three matcher rules follow, in declaration order: one merges
//! increment payloads into the count, one logs rejections of the
//! asynchronous increment, and one logs every lifecycle event of both
//! asynchronous operations. A lifecycle event can satisfy several of
//! these at once; each matching rule fires.

use crate::core::{Matcher, Phase, RuleSet};

use super::actions::{Action, Discriminant, OpKind};
use super::matchers::{any_lifecycle_of, rejected_with_value};
use super::state::CounterState;

fn merge_amount(state: CounterState, action: &Action) -> CounterState {
    match action.amount_payload() {
        Some(amount) => state.incremented_by(amount),
        None => state,
    }
}

/// Build the counter's rule set.
///
/// # Example
///
/// ```rust
/// use tallyset::counter::{counter_rules, Action, CounterState};
///
/// let rules = counter_rules();
///
/// let step = rules.apply(CounterState::default(), &Action::Decrement);
/// assert_eq!(step.next.value, -1);
///
/// let step = rules.apply(step.next, &Action::IncrementByAmount { amount: 6 });
/// assert_eq!(step.next.value, 5);
///
/// let step = rules.apply(step.next, &Action::ManualIncrement { amount: 10 });
/// assert_eq!(step.next.value, 15);
/// ```
pub fn counter_rules() -> RuleSet<CounterState, Action> {
    RuleSet::builder()
        .case(
            Discriminant::of(OpKind::Decrement),
            |state: CounterState, _: &Action| state.decremented(),
        )
        .case(Discriminant::of(OpKind::IncrementByAmount), merge_amount)
        .update(
            "increment-merge",
            Matcher::any_of([
                Discriminant::lifecycle(OpKind::IncrementAsync, Phase::Fulfilled),
                Discriminant::of(OpKind::ManualIncrement),
            ]),
            merge_amount,
        )
        .observe(
            "rejection-log",
            rejected_with_value(OpKind::IncrementAsync),
            |action: &Action| format!("Saw a rejected {} action", action.kind().name()),
        )
        .observe(
            "lifecycle-log",
            any_lifecycle_of([OpKind::AnotherAsyncOperation, OpKind::IncrementAsync]),
            |action: &Action| format!("Observed {} from a watched async operation", action.name()),
        )
        .build()
        .expect("Counter rule set should always build")
}
