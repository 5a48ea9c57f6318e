//! Streaming queries over a relation's tuples.
//!
//! Every query implements the same two-phase protocol: `process` is called
//! once per tuple during a single pass over the relation, then `result`
//! writes the finished report. `result` never mutates counting state, so a
//! report can be rendered more than once.
//!
//! Reports are self-delimited text: a banner line, the body, a banner line.
//! Column widths are a rendering convention; the reported data (labels,
//! counts, totals, violation entries) is the contract.

pub mod assert;
pub mod crosstab;
pub mod display;
pub mod partition;

pub use assert::Assert;
pub use crosstab::CrossTab;
pub use display::Display;
pub use partition::PartitionCount;

use crate::expr::Predicate;
use crate::relation::Relation;
use crate::tuple::Tuple;
use std::io::{self, Write};

pub(crate) const BANNER: &str = "=========================================";
pub(crate) const RULE: &str = "-----------------------------------------";

/// A streaming accumulator over a tuple sequence.
///
/// Lifecycle: construct, `process` each tuple once, then `result`. There is
/// no way back from reporting to accumulation.
pub trait Query {
    /// The query's derived label, as it appears in its report.
    fn label(&self) -> &str;

    /// Offer one tuple to the accumulator.
    fn process(&mut self, tuple: &Tuple);

    /// Write the report for everything accumulated so far.
    fn result(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Derive a query label from a base label and the gating predicate.
///
/// The `" given ..."` suffix is suppressed only for the shared default
/// instance, by identity. A user-built always-true predicate keeps its
/// suffix.
pub(crate) fn given_label(base: &str, given: &Predicate) -> String {
    if given.is_always() {
        base.to_string()
    } else {
        format!("{} given {}", base, given.label())
    }
}

/// Drive a relation's tuples through a batch of queries.
///
/// Each tuple in arrival order is offered to every query's `process` in
/// submission order; after the full pass, every query's `result` is written
/// to `out`, again in submission order. Queries are independent observers of
/// the same stream.
pub fn run(
    relation: &Relation,
    queries: &mut [Box<dyn Query>],
    out: &mut dyn Write,
) -> io::Result<()> {
    for tuple in relation.tuples() {
        for query in queries.iter_mut() {
            query.process(tuple);
        }
    }
    for query in queries.iter() {
        query.result(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Extractor;
    use indexmap::IndexMap;

    fn relation_of(rows: &[&[(&str, &str)]]) -> Relation {
        let mut rel = Relation::new();
        for row in rows {
            let fields: IndexMap<String, String> = row
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect();
            rel.add(fields);
        }
        rel
    }

    #[test]
    fn test_given_label_suppression() {
        assert_eq!(given_label("tense", &Predicate::always()), "tense");
        let infinitive = Predicate::new("infinitive", |_| true);
        assert_eq!(
            given_label("tense", &infinitive),
            "tense given infinitive"
        );
    }

    #[test]
    fn test_run_reports_in_submission_order() {
        let rel = relation_of(&[&[("pos", "N-")], &[("pos", "V-")]]);
        let mut queries: Vec<Box<dyn Query>> = vec![
            Box::new(PartitionCount::new(Extractor::field("pos"))),
            Box::new(Display::new(Extractor::field("pos"))),
        ];
        let mut out = Vec::new();
        run(&rel, &mut queries, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let partition_at = text.find("partitions:").unwrap();
        let items_at = text.find("items").unwrap();
        assert!(partition_at < items_at);
    }

    #[test]
    fn test_result_is_idempotent() {
        let rel = relation_of(&[&[("pos", "N-")], &[("pos", "N-")]]);
        let mut queries: Vec<Box<dyn Query>> =
            vec![Box::new(PartitionCount::new(Extractor::field("pos")))];
        let mut first = Vec::new();
        run(&rel, &mut queries, &mut first).unwrap();
        let mut second = Vec::new();
        queries[0].result(&mut second).unwrap();
        assert_eq!(first, second);
    }
}
