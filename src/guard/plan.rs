//! Guard lists classified once and resolved against a table.

use std::fmt;

use super::Guard;
use crate::error::GuardError;
use crate::predicate::{Predicate, PredicateTable, SharedPredicate};
use crate::value::{Callable, Value};

/// A token resolved to its table predicate.
#[derive(Clone)]
pub struct NameCheck {
    token: String,
    negated: bool,
    predicate: SharedPredicate,
}

impl NameCheck {
    /// The token without its negation marker.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// `true` for a negated token.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Apply the predicate, inverting the result for a negated token.
    pub fn check(&self, value: &Value) -> bool {
        self.predicate.check(value) != self.negated
    }
}

impl fmt::Debug for NameCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCheck")
            .field("token", &self.token)
            .field("negated", &self.negated)
            .finish()
    }
}

/// A guard list split by category.
///
/// Each category keeps the relative order of its guards; order across
/// categories is not kept, since each is combined as a unit.
///
/// ```rust
/// use type_guards::{Guard, Plan, PredicateTable};
///
/// let plan = Plan::compile(
///     PredicateTable::extended(),
///     &[
///         Guard::custom(|_| true),
///         Guard::from("string"),
///         Guard::group(["null", "array"]),
///         Guard::from("!nullish"),
///     ],
/// )
/// .unwrap();
///
/// let tokens: Vec<_> = plan.names().iter().map(|n| n.token()).collect();
/// assert_eq!(tokens, ["string", "nullish"]);
/// assert_eq!(plan.groups().len(), 1);
/// assert_eq!(plan.customs().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Plan {
    names: Vec<NameCheck>,
    groups: Vec<Plan>,
    customs: Vec<Callable>,
}

impl Plan {
    /// Classify `guards` and resolve every token, nested ones included.
    ///
    /// Fails with [`GuardError::UnknownTypeToken`] on the first token the
    /// table does not know.
    pub fn compile(table: &PredicateTable, guards: &[Guard]) -> Result<Self, GuardError> {
        let mut plan = Plan::default();
        for guard in guards {
            match guard {
                Guard::Name(token) => plan.names.push(resolve(table, token, false)?),
                Guard::Negated(token) => plan.names.push(resolve(table, token, true)?),
                Guard::Group(inner) => plan.groups.push(Plan::compile(table, inner)?),
                Guard::Custom(callable) => plan.customs.push(callable.clone()),
            }
        }
        Ok(plan)
    }

    /// Token checks, negated ones included.
    pub fn names(&self) -> &[NameCheck] {
        &self.names
    }

    /// Nested groups.
    pub fn groups(&self) -> &[Plan] {
        &self.groups
    }

    /// Custom predicates.
    pub fn customs(&self) -> &[Callable] {
        &self.customs
    }

    /// `true` for an empty guard list.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.groups.is_empty() && self.customs.is_empty()
    }
}

fn resolve(table: &PredicateTable, token: &str, negated: bool) -> Result<NameCheck, GuardError> {
    let predicate = table.lookup(token)?;
    Ok(NameCheck {
        token: token.to_string(),
        negated,
        predicate: predicate.clone(),
    })
}
