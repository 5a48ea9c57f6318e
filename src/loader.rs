//! Line-oriented tuple producers for delimited text sources.
//!
//! The engine itself only consumes tuples; these loaders are the producer
//! side, turning whitespace-delimited column files and `key:value` token
//! files into relation rows. Index and join descriptors pass straight
//! through to [`Relation::add_with`].

use crate::relation::{JoinSpec, Relation};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors produced while parsing a tuple source.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("line {line}: expected at most {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: malformed key:value token {token:?}")]
    MalformedToken { line: usize, token: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load whitespace-delimited columns, zipping each line's columns with
/// `field_names`. A line with fewer columns than names leaves the trailing
/// fields absent; more columns than names is an error. Blank lines are
/// skipped. Returns the number of tuples loaded.
pub fn load_columns<R: BufRead>(
    rel: &mut Relation,
    reader: R,
    field_names: &[&str],
    index_fields: &[&str],
    joins: &[JoinSpec],
) -> Result<usize, LoadError> {
    let mut count = 0;
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.is_empty() {
            continue;
        }
        if columns.len() > field_names.len() {
            return Err(LoadError::ColumnCount {
                line: number + 1,
                expected: field_names.len(),
                found: columns.len(),
            });
        }
        let fields: IndexMap<String, String> = field_names
            .iter()
            .zip(columns)
            .map(|(&name, value)| (name.to_string(), value.to_string()))
            .collect();
        rel.add_with(fields, index_fields, joins);
        count += 1;
    }
    debug!("loaded {} column tuples", count);
    Ok(count)
}

/// Load lines of whitespace-separated `key:value` tokens. Field names vary
/// per line; a token without a colon is an error. Blank lines are skipped.
/// Returns the number of tuples loaded.
pub fn load_key_value<R: BufRead>(
    rel: &mut Relation,
    reader: R,
    index_fields: &[&str],
    joins: &[JoinSpec],
) -> Result<usize, LoadError> {
    let mut count = 0;
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let mut fields = IndexMap::new();
        for token in tokens {
            let (key, value) = token.split_once(':').ok_or_else(|| LoadError::MalformedToken {
                line: number + 1,
                token: token.to_string(),
            })?;
            fields.insert(key.to_string(), value.to_string());
        }
        rel.add_with(fields, index_fields, joins);
        count += 1;
    }
    debug!("loaded {} key:value tuples", count);
    Ok(count)
}

/// Open `path` and delegate to [`load_columns`].
pub fn load_columns_path(
    rel: &mut Relation,
    path: impl AsRef<Path>,
    field_names: &[&str],
    index_fields: &[&str],
    joins: &[JoinSpec],
) -> Result<usize> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    load_columns(rel, BufReader::new(file), field_names, index_fields, joins)
        .with_context(|| format!("failed to load {}", path.display()))
}

/// Open `path` and delegate to [`load_key_value`].
pub fn load_key_value_path(
    rel: &mut Relation,
    path: impl AsRef<Path>,
    index_fields: &[&str],
    joins: &[JoinSpec],
) -> Result<usize> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    load_key_value(rel, BufReader::new(file), index_fields, joins)
        .with_context(|| format!("failed to load {}", path.display()))
}
