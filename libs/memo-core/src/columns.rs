//! Column helpers used to drive query/answer selection.

use crate::types::{Document, Row, TableSelection};
use std::collections::HashMap;

/// Column names across `docs`, most frequent first.
///
/// Ties keep the order in which the columns were first encountered.
pub fn rank_columns(docs: &[Document]) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for column in docs.iter().flat_map(|doc| doc.columns.iter()) {
        match index.get(column.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(column.as_str(), counts.len());
                counts.push((column.as_str(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().map(|(column, _)| column.to_string()).collect()
}

/// Index of the first ranked column listed in `defaults`.
pub fn default_column<S: AsRef<str>>(ranked: &[String], defaults: &[S]) -> Option<usize> {
    ranked
        .iter()
        .position(|column| defaults.iter().any(|d| d.as_ref() == column))
}

/// Split a comma or semicolon separated list, dropping blank entries.
pub fn split_columns(list: &str) -> Vec<String> {
    list.split([',', ';'])
        .map(str::trim)
        .filter(|column| !column.is_empty())
        .map(String::from)
        .collect()
}

/// Rows to practice for a selection.
///
/// A title that matches nothing selects no rows.
pub fn select_rows(docs: &[Document], selection: &TableSelection) -> Vec<Row> {
    match selection {
        TableSelection::All => docs.iter().flat_map(|doc| doc.rows.iter().cloned()).collect(),
        TableSelection::Title(title) => docs
            .iter()
            .find(|doc| &doc.title == title)
            .map(|doc| doc.rows.clone())
            .unwrap_or_default(),
    }
}
