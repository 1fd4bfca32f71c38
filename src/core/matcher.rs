//! Matchers select actions by routing key.
//!
//! A matcher is a closed set of discriminant keys. Rules attach one to
//! decide which dispatched actions they react to. Matching is a pure
//! membership test; no predicate functions are involved, so a rule
//! set's coverage can be inspected and validated up front.

/// A closed set of routing keys a rule reacts to.
///
/// # Example
///
/// ```rust
/// use tallyset::core::Matcher;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Signal {
///     Start,
///     Stop,
///     Tick,
/// }
///
/// let matcher = Matcher::any_of([Signal::Start, Signal::Stop]);
/// assert!(matcher.matches(Signal::Start));
/// assert!(matcher.matches(Signal::Stop));
/// assert!(!matcher.matches(Signal::Tick));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matcher<K> {
    keys: Vec<K>,
}

impl<K: Copy + Eq> Matcher<K> {
    /// Build a matcher that selects exactly one key.
    pub fn of(key: K) -> Self {
        Self { keys: vec![key] }
    }

    /// Build a matcher that selects any of the given keys.
    ///
    /// An empty key set is representable but rejected when the rule set
    /// is built, since a rule that can never fire is a configuration
    /// mistake.
    pub fn any_of<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Check whether the given key is in this matcher's set.
    pub fn matches(&self, key: K) -> bool {
        self.keys.contains(&key)
    }

    /// The keys this matcher selects, in insertion order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Check whether this matcher selects nothing.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
