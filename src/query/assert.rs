//! Assertion query: collects and reports tuples violating a predicate.

use crate::expr::{Extractor, Predicate, ABSENT_MARK};
use crate::query::{given_label, Query, BANNER, RULE};
use crate::tuple::Tuple;
use indexmap::IndexMap;
use std::io::{self, Write};

/// Listing longer than this repeats the total-count line after the
/// violations, so the summary survives a scrolled-away header.
pub const REPEAT_SUMMARY_AFTER: usize = 10;

/// Collects every gated tuple that fails an assertion predicate.
///
/// By default the report lists each violation in arrival order, rendered
/// through the display extractor. In unique mode it instead groups
/// violations by display value and reports each distinct value with its
/// occurrence count.
pub struct Assert {
    label: String,
    assertion: Predicate,
    display: Extractor,
    given: Predicate,
    unique: bool,
    repeat_after: usize,
    /// Display-rendered violations in arrival order.
    violations: Vec<Option<String>>,
}

impl Assert {
    pub fn new(assertion: Predicate, display: Extractor) -> Self {
        let given = Predicate::always();
        let label = given_label(assertion.label(), &given);
        Self {
            label,
            assertion,
            display,
            given,
            unique: false,
            repeat_after: REPEAT_SUMMARY_AFTER,
            violations: Vec::new(),
        }
    }

    /// Restrict the assertion to tuples passing `given`.
    pub fn given(mut self, given: Predicate) -> Self {
        self.label = given_label(self.assertion.label(), &given);
        self.given = given;
        self
    }

    /// Group violations by display value instead of listing each one.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Override the listing length after which the total line is repeated.
    pub fn repeat_summary_after(mut self, threshold: usize) -> Self {
        self.repeat_after = threshold;
        self
    }

    /// Number of violations collected so far.
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}

impl Query for Assert {
    fn label(&self) -> &str {
        &self.label
    }

    fn process(&mut self, tuple: &Tuple) {
        if self.given.test(tuple) && !self.assertion.test(tuple) {
            self.violations.push(self.display.extract(tuple));
        }
    }

    fn result(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", BANNER)?;
        if self.unique {
            let mut groups: IndexMap<&str, u64> = IndexMap::new();
            for violation in &self.violations {
                let shown = violation.as_deref().unwrap_or(ABSENT_MARK);
                *groups.entry(shown).or_insert(0) += 1;
            }
            writeln!(
                out,
                "violations of {}: {} types {} total",
                self.label,
                groups.len(),
                self.violations.len()
            )?;
            writeln!(out, "{}", RULE)?;
            for (value, count) in &groups {
                writeln!(out, "{:<20}{:>20}", value, count)?;
            }
        } else {
            writeln!(
                out,
                "violations of {}: {}",
                self.label,
                self.violations.len()
            )?;
            writeln!(out, "{}", RULE)?;
            for violation in &self.violations {
                writeln!(out, "{}", violation.as_deref().unwrap_or(ABSENT_MARK))?;
            }
            if self.violations.len() > self.repeat_after {
                writeln!(out, "{}", RULE)?;
                writeln!(
                    out,
                    "violations of {}: {}",
                    self.label,
                    self.violations.len()
                )?;
            }
        }
        writeln!(out, "{}", BANNER)?;
        Ok(())
    }
}
