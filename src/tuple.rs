//! Tuple representation for flat tabular records.
//!
//! A tuple is one input record: an insertion-ordered mapping from field name
//! to string value, plus an auxiliary set of tags populated by domain code.
//! Field values are never mutated once the tuple is constructed; queries and
//! extractors only read them.

use indexmap::IndexMap;
use std::collections::BTreeSet;

/// A single record in a relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tuple {
    fields: IndexMap<String, String>,
    tags: BTreeSet<String>,
}

impl Tuple {
    /// Create an empty tuple.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tuple from an ordered field map.
    pub fn from_fields(fields: IndexMap<String, String>) -> Self {
        Self {
            fields,
            tags: BTreeSet::new(),
        }
    }

    /// Create a tuple from (name, value) pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_fields(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up a field value. Missing fields are absent, not an error.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Iterate over (name, value) pairs in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Attach a tag. Tags are auxiliary markers and live outside the field
    /// map; adding one does not violate field immutability.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Iterate over tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_present_and_absent() {
        let t = Tuple::from_pairs([("form", "λογος"), ("pos", "N-")]);
        assert_eq!(t.get("form"), Some("λογος"));
        assert_eq!(t.get("pos"), Some("N-"));
        assert_eq!(t.get("lemma"), None);
    }

    #[test]
    fn test_field_order_preserved() {
        let t = Tuple::from_pairs([("b", "2"), ("a", "1"), ("c", "3")]);
        let names: Vec<&str> = t.fields().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_tags() {
        let mut t = Tuple::from_pairs([("form", "x")]);
        assert!(!t.has_tag("movable-nu"));
        t.add_tag("movable-nu");
        t.add_tag("crasis");
        assert!(t.has_tag("movable-nu"));
        let tags: Vec<&str> = t.tags().collect();
        assert_eq!(tags, vec!["crasis", "movable-nu"]);
    }

    #[test]
    fn test_empty_tuple() {
        let t = Tuple::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.get("anything"), None);
    }
}
