//! Matcher constructors for counter lifecycle events.
//!
//! These build [`Matcher`] values over [`Discriminant`] keys, covering
//! the recurring shapes: a rejection carrying a failure value, or the
//! whole lifecycle of one or more asynchronous operations.

use crate::core::{Matcher, Phase};

use super::actions::{Discriminant, OpKind};

/// Match the rejected events of one asynchronous operation.
///
/// Every rejection in this store carries its failure value, so this is
/// the rejected phase of `op`, nothing narrower.
pub fn rejected_with_value(op: OpKind) -> Matcher<Discriminant> {
    Matcher::of(Discriminant::lifecycle(op, Phase::Rejected))
}

/// Match every lifecycle event of the given asynchronous operations.
///
/// Expands each operation into its pending, fulfilled, and rejected
/// keys.
///
/// # Example
///
/// ```rust
/// use tallyset::core::Phase;
/// use tallyset::counter::{any_lifecycle_of, Discriminant, OpKind};
///
/// let matcher = any_lifecycle_of([OpKind::IncrementAsync]);
/// assert!(matcher.matches(Discriminant::lifecycle(OpKind::IncrementAsync, Phase::Pending)));
/// assert!(matcher.matches(Discriminant::lifecycle(OpKind::IncrementAsync, Phase::Rejected)));
/// assert!(!matcher.matches(Discriminant::of(OpKind::Decrement)));
/// ```
pub fn any_lifecycle_of<I>(ops: I) -> Matcher<Discriminant>
where
    I: IntoIterator<Item = OpKind>,
{
    Matcher::any_of(ops.into_iter().flat_map(|op| {
        [Phase::Pending, Phase::Fulfilled, Phase::Rejected]
            .into_iter()
            .map(move |phase| Discriminant::lifecycle(op, phase))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_with_value_selects_only_rejections() {
        let matcher = rejected_with_value(OpKind::IncrementAsync);

        assert!(matcher.matches(Discriminant::lifecycle(
            OpKind::IncrementAsync,
            Phase::Rejected
        )));
        assert!(!matcher.matches(Discriminant::lifecycle(
            OpKind::IncrementAsync,
            Phase::Fulfilled
        )));
        assert!(!matcher.matches(Discriminant::lifecycle(
            OpKind::IncrementAsync,
            Phase::Pending
        )));
        assert!(!matcher.matches(Discriminant::lifecycle(
            OpKind::AnotherAsyncOperation,
            Phase::Rejected
        )));
    }

    #[test]
    fn any_lifecycle_of_expands_all_phases() {
        let matcher = any_lifecycle_of([OpKind::AnotherAsyncOperation, OpKind::IncrementAsync]);

        assert_eq!(matcher.keys().len(), 6);
        for op in [OpKind::AnotherAsyncOperation, OpKind::IncrementAsync] {
            for phase in [Phase::Pending, Phase::Fulfilled, Phase::Rejected] {
                assert!(matcher.matches(Discriminant::lifecycle(op, phase)));
            }
        }
    }

    #[test]
    fn any_lifecycle_of_ignores_sync_actions() {
        let matcher = any_lifecycle_of([OpKind::IncrementAsync]);

        assert!(!matcher.matches(Discriminant::of(OpKind::Decrement)));
        assert!(!matcher.matches(Discriminant::of(OpKind::ManualIncrement)));
        assert!(!matcher.matches(Discriminant::of(OpKind::IncrementAsync)));
    }
}
