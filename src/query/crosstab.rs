//! Cross-tabulation query: a 2x2 contingency table over two predicates.

use crate::expr::Predicate;
use crate::query::{given_label, Query, BANNER, RULE};
use crate::tuple::Tuple;
use std::io::{self, Write};

/// Counts the four cells of the (a, b) truth table over gated tuples and
/// reports them with row, column, and grand totals.
pub struct CrossTab {
    label: String,
    a: Predicate,
    b: Predicate,
    given: Predicate,
    /// a and b
    both: u64,
    /// a and not b
    a_only: u64,
    /// not a and b
    b_only: u64,
    /// neither
    neither: u64,
}

impl CrossTab {
    pub fn new(a: Predicate, b: Predicate) -> Self {
        let given = Predicate::always();
        let label = given_label(&format!("{} vs {}", a.label(), b.label()), &given);
        Self {
            label,
            a,
            b,
            given,
            both: 0,
            a_only: 0,
            b_only: 0,
            neither: 0,
        }
    }

    /// Restrict the tabulation to tuples passing `given`.
    pub fn given(mut self, given: Predicate) -> Self {
        self.label = given_label(
            &format!("{} vs {}", self.a.label(), self.b.label()),
            &given,
        );
        self.given = given;
        self
    }

    /// The four cells as (both, a only, b only, neither).
    pub fn cells(&self) -> (u64, u64, u64, u64) {
        (self.both, self.a_only, self.b_only, self.neither)
    }
}

impl Query for CrossTab {
    fn label(&self) -> &str {
        &self.label
    }

    fn process(&mut self, tuple: &Tuple) {
        if !self.given.test(tuple) {
            return;
        }
        match (self.a.test(tuple), self.b.test(tuple)) {
            (true, true) => self.both += 1,
            (true, false) => self.a_only += 1,
            (false, true) => self.b_only += 1,
            (false, false) => self.neither += 1,
        }
    }

    fn result(&self, out: &mut dyn Write) -> io::Result<()> {
        let row_a = self.both + self.a_only;
        let row_not = self.b_only + self.neither;
        let col_b = self.both + self.b_only;
        let col_not = self.a_only + self.neither;
        let grand = row_a + row_not;

        writeln!(out)?;
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{}", self.label)?;
        writeln!(out, "{}", BANNER)?;
        writeln!(out, " {:>20} {:>8}", self.b.label(), "not")?;
        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "{:<10} | {:>8} {:>8} | {:>8}",
            self.a.label(),
            self.both,
            self.a_only,
            row_a
        )?;
        writeln!(
            out,
            "{:<10} | {:>8} {:>8} | {:>8}",
            "not", self.b_only, self.neither, row_not
        )?;
        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "{:<10} | {:>8} {:>8} | {:>8}",
            "", col_b, col_not, grand
        )?;
        writeln!(out, "{}", BANNER)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos_is(expected: &'static str) -> Predicate {
        Predicate::new(expected, move |t: &Tuple| t.get("pos") == Some(expected))
    }

    fn ends_in(suffix: &'static str) -> Predicate {
        Predicate::new(format!("-{}", suffix), move |t: &Tuple| {
            t.get("form").is_some_and(|f| f.ends_with(suffix))
        })
    }

    #[test]
    fn test_cells_partition_the_gated_stream() {
        let mut q = CrossTab::new(pos_is("N-"), ends_in("ς"));
        let rows = [
            ("λογος", "N-"),
            ("λογον", "N-"),
            ("λεγεις", "V-"),
            ("λεγει", "V-"),
        ];
        for (form, pos) in rows {
            q.process(&Tuple::from_pairs([("form", form), ("pos", pos)]));
        }
        assert_eq!(q.cells(), (1, 1, 1, 1));
        let (both, a_only, b_only, neither) = q.cells();
        assert_eq!(both + a_only + b_only + neither, rows.len() as u64);
    }

    #[test]
    fn test_totals_are_cell_sums() {
        let mut q = CrossTab::new(pos_is("N-"), ends_in("ν"));
        for (form, pos) in [("λογον", "N-"), ("λογος", "N-"), ("ελεγον", "V-")] {
            q.process(&Tuple::from_pairs([("form", form), ("pos", pos)]));
        }
        let (both, a_only, b_only, neither) = q.cells();
        let mut out = Vec::new();
        q.result(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let grand = both + a_only + b_only + neither;
        assert!(text.contains(&format!("{:>8}", grand)));
        assert!(text.contains(&format!(
            "{:>8} {:>8} | {:>8}",
            both,
            a_only,
            both + a_only
        )));
    }

    #[test]
    fn test_given_gates_and_labels() {
        let nominal = Predicate::new("nominal", |t: &Tuple| t.get("pos") == Some("N-"));
        let mut q = CrossTab::new(ends_in("ς"), ends_in("ν")).given(nominal);
        assert_eq!(q.label(), "-ς vs -ν given nominal");
        q.process(&Tuple::from_pairs([("form", "ελεγον"), ("pos", "V-")]));
        assert_eq!(q.cells(), (0, 0, 0, 0));
    }
}
