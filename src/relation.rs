//! Ordered tuple collections with load-time join enrichment.
//!
//! A relation owns its tuples in arrival order. Unique field indexes exist
//! only to serve join enrichment while loading; query execution never
//! consults them.

use crate::query::{run, Query};
use crate::tuple::Tuple;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::io::{self, Write};

/// Join enrichment descriptor.
///
/// When a tuple is added, the other relation's unique index on `other_key`
/// is probed with the new tuple's `local_key` value; on a hit, each
/// `(source, dest)` pair copies a field of the matched tuple into the new
/// tuple before it is finalized. A miss contributes nothing.
pub struct JoinSpec<'a> {
    other: &'a Relation,
    local_key: String,
    other_key: String,
    copy: Vec<(String, String)>,
}

impl<'a> JoinSpec<'a> {
    pub fn new<K, S, D>(
        other: &'a Relation,
        local_key: impl Into<String>,
        other_key: impl Into<String>,
        copy: K,
    ) -> Self
    where
        K: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<String>,
    {
        Self {
            other,
            local_key: local_key.into(),
            other_key: other_key.into(),
            copy: copy
                .into_iter()
                .map(|(s, d)| (s.into(), d.into()))
                .collect(),
        }
    }
}

/// An insertion-ordered collection of tuples.
#[derive(Debug, Default)]
pub struct Relation {
    tuples: Vec<Tuple>,
    /// Per indexed field: value -> position of the most recent tuple with
    /// that value. Last write wins on duplicate keys.
    indexes: HashMap<String, HashMap<String, usize>>,
}

impl Relation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tuple built from the given fields.
    pub fn add(&mut self, fields: IndexMap<String, String>) {
        self.add_with(fields, &[], &[]);
    }

    /// Append a tuple, first enriching it via `joins`, then registering it
    /// in the unique index of each field named in `index_fields`.
    ///
    /// A tuple lacking an indexed field is simply not indexed under it.
    pub fn add_with(
        &mut self,
        mut fields: IndexMap<String, String>,
        index_fields: &[&str],
        joins: &[JoinSpec],
    ) {
        for join in joins {
            let matched = fields
                .get(&join.local_key)
                .and_then(|value| join.other.lookup(&join.other_key, value));
            if let Some(other_tuple) = matched {
                for (source, dest) in &join.copy {
                    if let Some(value) = other_tuple.get(source) {
                        fields.insert(dest.clone(), value.to_string());
                    }
                }
            }
        }

        let position = self.tuples.len();
        for name in index_fields {
            if let Some(value) = fields.get(*name) {
                self.indexes
                    .entry((*name).to_string())
                    .or_default()
                    .insert(value.clone(), position);
            }
        }
        self.tuples.push(Tuple::from_fields(fields));
    }

    /// Probe the unique index on `field` for `value`. Returns the most
    /// recently indexed tuple with that value, if any.
    pub fn lookup(&self, field: &str, value: &str) -> Option<&Tuple> {
        self.indexes
            .get(field)?
            .get(value)
            .map(|&position| &self.tuples[position])
    }

    /// Tuples in arrival order.
    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    /// Mutable access, for domain code that attaches tags after loading.
    pub fn tuples_mut(&mut self) -> &mut [Tuple] {
        &mut self.tuples
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Run a batch of queries over this relation's tuples and write each
    /// report to `out`.
    pub fn query(&self, queries: &mut [Box<dyn Query>], out: &mut dyn Write) -> io::Result<()> {
        run(self, queries, out)
    }
}
