//! Labeled predicate/extractor algebra.
//!
//! This module provides the combinator layer queries are built from:
//! - Predicates: labeled boolean functions over a tuple
//! - Extractors: labeled functions from a tuple to a value or absent
//! - Combinators (and/or/not/all/any, field, list) that derive both the
//!   composed function and its human-readable label
//!
//! Labels exist only for reporting. The engine never compares predicates by
//! label; the one identity it cares about (the shared always-true default)
//! is checked by pointer.

pub mod extractor;
pub mod predicate;

pub use extractor::{Extractor, ABSENT_MARK};
pub use predicate::Predicate;
