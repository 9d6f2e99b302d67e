//! Core types for memorization practice.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One content line of a table: column name to trimmed cell text.
pub type Row = BTreeMap<String, String>;

/// A markdown section reduced to structured rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Most recent heading text before the table, empty if none was seen.
    pub title: String,
    /// Header cells, trimmed, in table order.
    pub columns: Vec<String>,
    #[serde(rename = "contents")]
    pub rows: Vec<Row>,
}

impl Document {
    /// Create an empty document under the given heading.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// A row being practiced, with how many times it was answered wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub row: Row,
    pub miss_count: u32,
}

impl QuizItem {
    pub fn new(row: Row) -> Self {
        Self { row, miss_count: 0 }
    }
}

/// Which rows a quiz is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableSelection {
    /// Every row of every document, in document order.
    All,
    /// Rows of the first document carrying this title.
    Title(String),
}

impl TableSelection {
    /// Build a selection from an optional title, `None` meaning all tables.
    pub fn from_title(title: Option<String>) -> Self {
        match title {
            Some(title) => Self::Title(title),
            None => Self::All,
        }
    }
}

/// User settings persisted by the settings store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Git URL of the repository holding the markdown files.
    #[serde(default)]
    pub repository_url: String,
    /// Column names preselected as the query column, in priority order.
    #[serde(default)]
    pub query_columns: Vec<String>,
    /// Column names preselected as the answer column, in priority order.
    #[serde(default)]
    pub answer_columns: Vec<String>,
}
