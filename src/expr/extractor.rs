//! Labeled value extractors over tuples.

use crate::tuple::Tuple;
use std::fmt;
use std::sync::Arc;

/// Placeholder reports use for an absent value.
pub const ABSENT_MARK: &str = "-";

type ExtractorFn = dyn Fn(&Tuple) -> Option<String> + Send + Sync;

/// A value projection over a tuple, paired with a descriptive label.
///
/// Extraction is total: a missing field yields `None` (the absent marker),
/// never an error. Like [`Predicate`](crate::expr::Predicate), extractors
/// clone cheaply and combinators compose labels as strings.
#[derive(Clone)]
pub struct Extractor {
    label: String,
    eval: Arc<ExtractorFn>,
}

impl Extractor {
    /// Create an extractor from a label and an evaluation function.
    pub fn new(
        label: impl Into<String>,
        eval: impl Fn(&Tuple) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            eval: Arc::new(eval),
        }
    }

    /// Extract the named field; the label is the field name itself.
    pub fn field(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = name.clone();
        Extractor::new(label, move |t| t.get(&name).map(str::to_string))
    }

    /// Space-join the results of several extractors, substituting
    /// [`ABSENT_MARK`] for any absent value. The label joins the
    /// sub-labels with `", "`.
    pub fn list(extractors: impl IntoIterator<Item = Extractor>) -> Self {
        let items: Vec<Extractor> = extractors.into_iter().collect();
        let label = items
            .iter()
            .map(|e| e.label.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let evals: Vec<Arc<ExtractorFn>> = items.iter().map(|e| Arc::clone(&e.eval)).collect();
        Extractor {
            label,
            eval: Arc::new(move |t| {
                Some(
                    evals
                        .iter()
                        .map(|e| e(t).unwrap_or_else(|| ABSENT_MARK.to_string()))
                        .collect::<Vec<_>>()
                        .join(" "),
                )
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Evaluate against a tuple. `None` means the value is absent.
    pub fn extract(&self, tuple: &Tuple) -> Option<String> {
        (self.eval)(tuple)
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor").field("label", &self.label).finish()
    }
}
