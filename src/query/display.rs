//! Display query: collects matching tuples and reports a rendered sample.

use crate::expr::{Extractor, Predicate, ABSENT_MARK};
use crate::query::{Query, BANNER};
use crate::tuple::Tuple;
use std::io::{self, Write};

/// Collects every gated tuple and reports up to `limit` of them rendered
/// through the display extractor, followed by the total match count. The
/// count covers all matches, not just the listed sample.
pub struct Display {
    label: String,
    display: Extractor,
    given: Predicate,
    limit: Option<usize>,
    /// Display-rendered matches in arrival order.
    rows: Vec<Option<String>>,
}

impl Display {
    pub fn new(display: Extractor) -> Self {
        let label = display.label().to_string();
        Self {
            label,
            display,
            given: Predicate::always(),
            limit: None,
            rows: Vec::new(),
        }
    }

    /// Restrict the listing to tuples passing `given`.
    pub fn given(mut self, given: Predicate) -> Self {
        self.given = given;
        self.label = self.derive_label();
        self
    }

    /// Cap how many rows the report lists.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self.label = self.derive_label();
        self
    }

    fn derive_label(&self) -> String {
        let mut label = self.display.label().to_string();
        if !self.given.is_always() {
            label.push(' ');
            label.push_str(self.given.label());
        }
        if let Some(limit) = self.limit {
            label.push_str(&format!(" limit {}", limit));
        }
        label
    }

    /// Number of matches collected so far.
    pub fn match_count(&self) -> usize {
        self.rows.len()
    }
}

impl Query for Display {
    fn label(&self) -> &str {
        &self.label
    }

    fn process(&mut self, tuple: &Tuple) {
        if self.given.test(tuple) {
            self.rows.push(self.display.extract(tuple));
        }
    }

    fn result(&self, out: &mut dyn Write) -> io::Result<()> {
        let shown = self.limit.unwrap_or(self.rows.len());
        writeln!(out)?;
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{}", self.label)?;
        writeln!(out, "{}", BANNER)?;
        for row in self.rows.iter().take(shown) {
            writeln!(out, "{}", row.as_deref().unwrap_or(ABSENT_MARK))?;
        }
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{} items", self.rows.len())?;
        writeln!(out, "{}", BANNER)?;
        Ok(())
    }
}
