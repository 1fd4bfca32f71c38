//! Pure rule engine: case handlers plus ordered matcher rules.
//!
//! A `RuleSet` is the complete description of how a store reacts to
//! actions. It has two layers. Case handlers are keyed by exact routing
//! key and at most one runs per dispatch, producing the base reduction.
//! Rules then run in declaration order; every rule whose matcher covers
//! the action's key fires, either updating the state further or
//! emitting a diagnostic entry. Applying a rule set is a pure function
//! of state and action.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::action::StoreAction;
use super::diagnostics::DiagnosticEntry;
use super::matcher::Matcher;
use super::state::StoreState;

type Handler<S, A> = Box<dyn Fn(S, &A) -> S + Send + Sync>;
type Describe<A> = Box<dyn Fn(&A) -> String + Send + Sync>;

enum RuleEffect<S, A> {
    /// Fold the matched action into the state.
    Update(Handler<S, A>),
    /// Leave state alone and emit a diagnostic entry.
    Observe(Describe<A>),
}

struct Rule<S: StoreState, A: StoreAction> {
    name: &'static str,
    matcher: Matcher<A::Key>,
    effect: RuleEffect<S, A>,
}

/// The outcome of applying a rule set to one action.
#[derive(Clone, Debug)]
pub struct Reduction<S: StoreState> {
    /// The state after the case handler and all matching update rules.
    pub next: S,
    /// Diagnostics from observational rules, in rule declaration order.
    pub diagnostics: Vec<DiagnosticEntry>,
}

/// Errors produced when building a rule set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Two case handlers were registered for the same routing key.
    #[error("Duplicate case handler for key {key}. Each routing key takes at most one case")]
    DuplicateCase { key: String },

    /// A rule was registered with a matcher that selects nothing.
    #[error("Matcher for rule '{rule}' is empty. Give every rule at least one key to match")]
    EmptyMatcher { rule: &'static str },

    /// Two rules were registered under the same name.
    #[error("Duplicate rule name '{rule}'. Each rule needs a distinct name")]
    DuplicateRule { rule: &'static str },
}

/// An immutable table of case handlers and ordered matcher rules.
///
/// # Example
///
/// ```rust
/// use tallyset::core::{Matcher, RuleSet, StoreAction, StoreState};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
/// struct Tally {
///     total: i64,
/// }
///
/// impl StoreState for Tally {}
///
/// #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// enum TallyAction {
///     Add(i64),
///     Audit,
/// }
///
/// impl StoreAction for TallyAction {
///     type Key = u8;
///
///     fn key(&self) -> u8 {
///         match self {
///             Self::Add(_) => 0,
///             Self::Audit => 1,
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Add(_) => "tally/add",
///             Self::Audit => "tally/audit",
///         }
///     }
/// }
///
/// let rules = RuleSet::builder()
///     .case(0, |state: Tally, action: &TallyAction| match action {
///         TallyAction::Add(n) => Tally { total: state.total + n },
///         TallyAction::Audit => state,
///     })
///     .observe("audit-log", Matcher::of(1), |_: &TallyAction| {
///         "Audit requested".to_string()
///     })
///     .build()
///     .unwrap();
///
/// let step = rules.apply(Tally::default(), &TallyAction::Add(4));
/// assert_eq!(step.next.total, 4);
/// assert!(step.diagnostics.is_empty());
///
/// let step = rules.apply(step.next, &TallyAction::Audit);
/// assert_eq!(step.next.total, 4);
/// assert_eq!(step.diagnostics.len(), 1);
/// assert_eq!(step.diagnostics[0].rule, "audit-log");
/// ```
pub struct RuleSet<S: StoreState, A: StoreAction> {
    cases: HashMap<A::Key, Handler<S, A>>,
    rules: Vec<Rule<S, A>>,
}

impl<S: StoreState, A: StoreAction> RuleSet<S, A> {
    /// Start building a rule set.
    pub fn builder() -> RuleSetBuilder<S, A> {
        RuleSetBuilder::new()
    }

    /// Apply one action: case handler first, then every matching rule
    /// in declaration order.
    ///
    /// Pure. The same state and action always produce the same
    /// reduction, and the rule set itself never changes.
    pub fn apply(&self, state: S, action: &A) -> Reduction<S> {
        let key = action.key();

        let mut next = match self.cases.get(&key) {
            Some(case) => case(state, action),
            None => state,
        };

        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            if !rule.matcher.matches(key) {
                continue;
            }
            match &rule.effect {
                RuleEffect::Update(handler) => next = handler(next, action),
                RuleEffect::Observe(describe) => diagnostics.push(DiagnosticEntry::for_action(
                    rule.name,
                    describe(action),
                    action,
                )),
            }
        }

        Reduction { next, diagnostics }
    }

    /// Check whether a case handler is registered for the given key.
    pub fn has_case(&self, key: A::Key) -> bool {
        self.cases.contains_key(&key)
    }

    /// Names of all rules, in declaration order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }
}

/// Fluent builder for [`RuleSet`].
///
/// Cases and rules are collected in call order; `build` validates the
/// table and freezes it.
pub struct RuleSetBuilder<S: StoreState, A: StoreAction> {
    cases: Vec<(A::Key, Handler<S, A>)>,
    rules: Vec<Rule<S, A>>,
}

impl<S: StoreState, A: StoreAction> RuleSetBuilder<S, A> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            cases: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Register the case handler for one routing key.
    pub fn case<F>(mut self, key: A::Key, handler: F) -> Self
    where
        F: Fn(S, &A) -> S + Send + Sync + 'static,
    {
        self.cases.push((key, Box::new(handler)));
        self
    }

    /// Register a named rule that updates state for every matched action.
    pub fn update<F>(mut self, name: &'static str, matcher: Matcher<A::Key>, handler: F) -> Self
    where
        F: Fn(S, &A) -> S + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            name,
            matcher,
            effect: RuleEffect::Update(Box::new(handler)),
        });
        self
    }

    /// Register a named rule that emits a diagnostic for every matched
    /// action, leaving state untouched.
    pub fn observe<F>(mut self, name: &'static str, matcher: Matcher<A::Key>, describe: F) -> Self
    where
        F: Fn(&A) -> String + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            name,
            matcher,
            effect: RuleEffect::Observe(Box::new(describe)),
        });
        self
    }

    /// Validate and freeze the rule set.
    ///
    /// # Errors
    ///
    /// Returns `BuildError` if two cases share a key, a rule's matcher
    /// is empty, or two rules share a name.
    pub fn build(self) -> Result<RuleSet<S, A>, BuildError> {
        let mut cases = HashMap::with_capacity(self.cases.len());
        for (key, handler) in self.cases {
            if cases.insert(key, handler).is_some() {
                return Err(BuildError::DuplicateCase {
                    key: format!("{key:?}"),
                });
            }
        }

        let mut names = HashSet::with_capacity(self.rules.len());
        for rule in &self.rules {
            if rule.matcher.is_empty() {
                return Err(BuildError::EmptyMatcher { rule: rule.name });
            }
            if !names.insert(rule.name) {
                return Err(BuildError::DuplicateRule { rule: rule.name });
            }
        }

        Ok(RuleSet {
            cases,
            rules: self.rules,
        })
    }
}

impl<S: StoreState, A: StoreAction> Default for RuleSetBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
