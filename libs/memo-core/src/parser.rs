//! Markdown table parser.
//!
//! # Format
//! ```markdown
//! # Capitals
//!
//! | Country | Capital |
//! |---------|:-------:|
//! | France  | Paris   |
//! | Japan   | Tokyo   |
//! ```
//!
//! Each heading starts a new document. The first table beneath it supplies
//! the columns (the last header line before the separator wins) and every
//! table line after the separator becomes a row. Anything else is ignored.

use crate::types::{Document, Row};
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s*(.+)").expect("valid heading pattern"));

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|(?:\s*:?-+:?\s*\|)+$").expect("valid separator pattern")
});

/// Parse markdown content into documents, dropping those without rows.
pub fn parse(content: &str) -> Vec<Document> {
    let mut parser = Parser::new();

    for line in content.lines() {
        parser.process_line(line);
    }

    let docs = parser.finalize();
    tracing::info!("{} tables are loaded", docs.len());
    docs
}

/// Split a table line into the raw text of its cells.
///
/// Cells are the non-empty runs following each `|`, so `| A | B |` yields
/// `[" A ", " B "]` and empty cells such as the middle of `|a||b|` vanish.
pub fn table_cells(line: &str) -> Vec<&str> {
    line.split('|')
        .skip(1)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Whether a trimmed line is a header/content separator like `|---|:--:|`.
pub fn is_separator(line: &str) -> bool {
    SEPARATOR.is_match(line)
}

struct Parser {
    docs: Vec<Document>,
    current: Document,
    header_locked: bool,
}

impl Parser {
    fn new() -> Self {
        Self {
            docs: Vec::new(),
            current: Document::default(),
            header_locked: false,
        }
    }

    fn process_line(&mut self, line: &str) {
        match Self::parse_line(line.trim()) {
            LineType::Heading(title) => self.handle_heading(title),
            LineType::Separator => self.header_locked = true,
            LineType::Table(cells) if self.header_locked => self.handle_content(&cells),
            LineType::Table(cells) => self.handle_header(&cells),
            LineType::Text => {}
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        if let Some(caps) = HEADING.captures(line) {
            let title = caps.get(1).map_or("", |m| m.as_str());
            return LineType::Heading(title);
        }

        if !line.starts_with('|') {
            return LineType::Text;
        }

        if is_separator(line) {
            return LineType::Separator;
        }

        LineType::Table(table_cells(line))
    }

    fn handle_heading(&mut self, title: &str) {
        let finished = std::mem::replace(&mut self.current, Document::new(title));
        self.header_locked = false;
        self.push(finished);
    }

    fn handle_header(&mut self, cells: &[&str]) {
        self.current.columns = cells.iter().map(|cell| cell.trim().to_string()).collect();
        tracing::debug!(columns = ?self.current.columns, "table header");
    }

    fn handle_content(&mut self, cells: &[&str]) {
        // zip stops at the shorter side: missing cells leave columns absent
        let row: Row = self
            .current
            .columns
            .iter()
            .zip(cells)
            .map(|(column, cell)| (column.clone(), cell.trim().to_string()))
            .collect();
        self.current.rows.push(row);
    }

    fn push(&mut self, doc: Document) {
        if !doc.rows.is_empty() {
            self.docs.push(doc);
        }
    }

    fn finalize(mut self) -> Vec<Document> {
        let last = std::mem::take(&mut self.current);
        self.push(last);
        self.docs
    }
}

enum LineType<'a> {
    Heading(&'a str),
    Separator,
    Table(Vec<&'a str>),
    Text,
}
