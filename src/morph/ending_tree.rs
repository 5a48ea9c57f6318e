//! Ending-tree query: counts of accent-stripped word endings, by final
//! character, then final two, then final three.

use crate::expr::Predicate;
use crate::morph::strip_accents;
use crate::query::{Query, BANNER};
use crate::tuple::Tuple;
use indexmap::IndexMap;
use std::io::{self, Write};

/// A three-level trie over the last characters of each gated form.
///
/// Forms shorter than three characters are left-padded with `#`, which
/// shows up verbatim in the deepest listing. `depth` trims how many levels
/// the report descends (1 to 3).
pub struct EndingTree {
    label: String,
    given: Predicate,
    depth: usize,
    /// ultimate char -> penult char -> antepenult char -> count
    root: IndexMap<char, IndexMap<char, IndexMap<char, u64>>>,
}

impl Default for EndingTree {
    fn default() -> Self {
        Self::new()
    }
}

impl EndingTree {
    pub fn new() -> Self {
        let given = Predicate::always();
        Self {
            label: format!("Ending Tree given {}", given.label()),
            given,
            depth: 3,
            root: IndexMap::new(),
        }
    }

    /// Restrict the tree to tuples passing `given`.
    pub fn given(mut self, given: Predicate) -> Self {
        self.label = format!("Ending Tree given {}", given.label());
        self.given = given;
        self
    }

    /// How many trie levels the report descends (clamped to 1..=3).
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth.clamp(1, 3);
        self
    }
}

impl Query for EndingTree {
    fn label(&self) -> &str {
        &self.label
    }

    fn process(&mut self, tuple: &Tuple) {
        if !self.given.test(tuple) {
            return;
        }
        let Some(form) = tuple.get("form") else {
            return;
        };
        let padded = format!("###{}", strip_accents(form));
        let tail: Vec<char> = padded.chars().rev().take(3).collect();
        let (ultimate, penult, antepenult) = (tail[0], tail[1], tail[2]);
        *self
            .root
            .entry(ultimate)
            .or_default()
            .entry(penult)
            .or_default()
            .entry(antepenult)
            .or_insert(0) += 1;
    }

    fn result(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{}", self.label)?;
        writeln!(out, "{}", BANNER)?;
        for (ultimate, penults) in &self.root {
            let total: u64 = penults.values().flat_map(|antes| antes.values()).sum();
            writeln!(out, "{:>20} {}", format!("-{}", ultimate), total)?;
            if self.depth == 1 {
                continue;
            }
            for (penult, antes) in penults {
                let subtotal: u64 = antes.values().sum();
                writeln!(
                    out,
                    "{:>20}   {}",
                    format!("-{}{}", penult, ultimate),
                    subtotal
                )?;
                if self.depth == 2 {
                    continue;
                }
                for (antepenult, count) in antes {
                    writeln!(
                        out,
                        "{:>20}     {}",
                        format!("-{}{}{}", antepenult, penult, ultimate),
                        count
                    )?;
                }
            }
        }
        writeln!(out, "{}", BANNER)?;
        Ok(())
    }
}
