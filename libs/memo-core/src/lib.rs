//! Core library for markdown-table memorization practice.
//!
//! Provides:
//! - Markdown table parser turning sections into structured documents
//! - Quiz session with miss-count weighted reordering between passes
//! - Column helpers (frequency ranking, default picks, row selection)
//! - Shared types (Document, Row, QuizItem, Settings, etc.)

pub mod columns;
pub mod error;
pub mod parser;
pub mod session;
pub mod types;

pub use columns::{default_column, rank_columns, select_rows, split_columns};
pub use error::{QuizError, Result};
pub use parser::parse;
pub use session::QuizSession;
pub use types::{Document, QuizItem, Row, Settings, TableSelection};
