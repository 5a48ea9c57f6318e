//! Labeled boolean predicates over tuples.

use crate::tuple::Tuple;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

type PredicateFn = dyn Fn(&Tuple) -> bool + Send + Sync;

/// A boolean test over a tuple, paired with a descriptive label.
///
/// Predicates clone cheaply: the evaluation function is shared behind an
/// `Arc`. Combinators build new predicates whose labels are composed from
/// their inputs' labels.
#[derive(Clone)]
pub struct Predicate {
    label: String,
    eval: Arc<PredicateFn>,
}

/// The one shared always-true instance. `Predicate::always` clones it, so
/// every default `given` shares the same evaluation function and can be
/// recognized by pointer identity.
static ALWAYS: Lazy<Predicate> = Lazy::new(|| Predicate::new("true", |_| true));

impl Predicate {
    /// Create a predicate from a label and an evaluation function.
    pub fn new(
        label: impl Into<String>,
        eval: impl Fn(&Tuple) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            eval: Arc::new(eval),
        }
    }

    /// The shared always-true predicate, label `"true"`.
    pub fn always() -> Self {
        ALWAYS.clone()
    }

    /// A constant-false predicate, label `"false"`.
    pub fn never() -> Self {
        Predicate::new("false", |_| false)
    }

    /// Whether this is the shared `always()` instance. Identity, not
    /// semantics: a user-built constant-true predicate is not `always`, so
    /// queries keep its label in their reports.
    pub fn is_always(&self) -> bool {
        Arc::ptr_eq(&self.eval, &ALWAYS.eval)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Evaluate against a tuple.
    pub fn test(&self, tuple: &Tuple) -> bool {
        (self.eval)(tuple)
    }

    /// Short-circuit conjunction, label `"and(a,b)"`.
    pub fn and(&self, other: &Predicate) -> Predicate {
        let label = format!("and({},{})", self.label, other.label);
        let a = Arc::clone(&self.eval);
        let b = Arc::clone(&other.eval);
        Predicate {
            label,
            eval: Arc::new(move |t| a(t) && b(t)),
        }
    }

    /// Short-circuit disjunction, label `"or(a,b)"`.
    pub fn or(&self, other: &Predicate) -> Predicate {
        let label = format!("or({},{})", self.label, other.label);
        let a = Arc::clone(&self.eval);
        let b = Arc::clone(&other.eval);
        Predicate {
            label,
            eval: Arc::new(move |t| a(t) || b(t)),
        }
    }

    /// Negation, label `"not(a)"`.
    pub fn not(&self) -> Predicate {
        let label = format!("not({})", self.label);
        let a = Arc::clone(&self.eval);
        Predicate {
            label,
            eval: Arc::new(move |t| !a(t)),
        }
    }

    /// N-ary conjunction, label `"all(a, b, ...)"`. All of nothing is true.
    pub fn all(preds: impl IntoIterator<Item = Predicate>) -> Predicate {
        let preds: Vec<Predicate> = preds.into_iter().collect();
        let label = format!("all({})", join_labels(&preds));
        let evals: Vec<Arc<PredicateFn>> = preds.iter().map(|p| Arc::clone(&p.eval)).collect();
        Predicate {
            label,
            eval: Arc::new(move |t| evals.iter().all(|e| e(t))),
        }
    }

    /// N-ary disjunction, label `"any(a, b, ...)"`. Any of nothing is false.
    pub fn any(preds: impl IntoIterator<Item = Predicate>) -> Predicate {
        let preds: Vec<Predicate> = preds.into_iter().collect();
        let label = format!("any({})", join_labels(&preds));
        let evals: Vec<Arc<PredicateFn>> = preds.iter().map(|p| Arc::clone(&p.eval)).collect();
        Predicate {
            label,
            eval: Arc::new(move |t| evals.iter().any(|e| e(t))),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("label", &self.label).finish()
    }
}

fn join_labels(preds: &[Predicate]) -> String {
    preds
        .iter()
        .map(|p| p.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
