//! Partition-count query: occurrences per distinct extractor output.

use crate::expr::{Extractor, Predicate, ABSENT_MARK};
use crate::query::{given_label, Query, BANNER, RULE};
use crate::tuple::Tuple;
use indexmap::IndexMap;
use std::io::{self, Write};

/// Counts how many gated tuples fall into each distinct output of an
/// extractor, the absent output included. Buckets report in first-seen
/// order.
pub struct PartitionCount {
    label: String,
    property: Extractor,
    given: Predicate,
    buckets: IndexMap<Option<String>, u64>,
}

impl PartitionCount {
    /// Partition all tuples by `property`.
    pub fn new(property: Extractor) -> Self {
        let given = Predicate::always();
        let label = given_label(property.label(), &given);
        Self {
            label,
            property,
            given,
            buckets: IndexMap::new(),
        }
    }

    /// Restrict the count to tuples passing `given`.
    pub fn given(mut self, given: Predicate) -> Self {
        self.label = given_label(self.property.label(), &given);
        self.given = given;
        self
    }
}

impl Query for PartitionCount {
    fn label(&self) -> &str {
        &self.label
    }

    fn process(&mut self, tuple: &Tuple) {
        if self.given.test(tuple) {
            *self.buckets.entry(self.property.extract(tuple)).or_insert(0) += 1;
        }
    }

    fn result(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{}", self.label)?;
        writeln!(out, "{}", BANNER)?;
        for (value, count) in &self.buckets {
            let shown = value.as_deref().unwrap_or(ABSENT_MARK);
            writeln!(out, "{:<20}{:>20}", shown, count)?;
        }
        writeln!(out, "{}", RULE)?;
        writeln!(out, "partitions: {}", self.buckets.len())?;
        writeln!(out, "{}", BANNER)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(pos: Option<&str>) -> Tuple {
        match pos {
            Some(p) => Tuple::from_pairs([("pos", p)]),
            None => Tuple::from_pairs([("form", "x")]),
        }
    }

    fn report(query: &PartitionCount) -> String {
        let mut out = Vec::new();
        query.result(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_buckets_in_first_seen_order() {
        let mut q = PartitionCount::new(Extractor::field("pos"));
        for pos in ["V-", "N-", "V-", "A-", "N-", "V-"] {
            q.process(&tuple(Some(pos)));
        }
        let text = report(&q);
        let v = text.find("V-").unwrap();
        let n = text.find("N-").unwrap();
        let a = text.find("A-").unwrap();
        assert!(v < n && n < a);
        assert!(text.contains("partitions: 3"));
    }

    #[test]
    fn test_counts_sum_to_gated_tuples() {
        let noun_only = Predicate::new("noun", |t: &Tuple| t.get("pos") == Some("N-"));
        let mut q = PartitionCount::new(Extractor::field("pos")).given(noun_only);
        for pos in ["V-", "N-", "N-", "A-"] {
            q.process(&tuple(Some(pos)));
        }
        let total: u64 = q.buckets.values().sum();
        assert_eq!(total, 2);
        assert_eq!(q.buckets.len(), 1);
    }

    #[test]
    fn test_absent_bucket() {
        let mut q = PartitionCount::new(Extractor::field("pos"));
        q.process(&tuple(Some("N-")));
        q.process(&tuple(None));
        q.process(&tuple(None));
        assert_eq!(q.buckets.get(&None), Some(&2));
        let text = report(&q);
        assert!(text.contains("partitions: 2"));
        assert!(text.lines().any(|l| l.starts_with('-') && l.contains('2')));
    }

    #[test]
    fn test_label_with_given() {
        let q = PartitionCount::new(Extractor::field("tense"))
            .given(Predicate::new("infinitive", |_| true));
        assert_eq!(q.label(), "tense given infinitive");
        let plain = PartitionCount::new(Extractor::field("tense"));
        assert_eq!(plain.label(), "tense");
    }
}
