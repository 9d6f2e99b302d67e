//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from memo-core
pub use memo_core::types::{Document, Row, Settings, TableSelection};

use crate::services::sessions::ActiveQuiz;

// === Session types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionRegisterResponse {
    pub session_id: Uuid,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
    pub file: Option<String>,
    pub document_count: usize,
    pub quiz_active: bool,
}

// === Settings types ===

/// Column defaults as typed in a settings form or as a ready list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnList {
    Text(String),
    List(Vec<String>),
}

impl ColumnList {
    pub fn into_columns(self) -> Vec<String> {
        match self {
            ColumnList::Text(text) => memo_core::split_columns(&text),
            ColumnList::List(list) => list
                .into_iter()
                .map(|column| column.trim().to_string())
                .filter(|column| !column.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub repository_url: Option<String>,
    pub query_columns: Option<ColumnList>,
    pub answer_columns: Option<ColumnList>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsResponse {
    #[serde(flatten)]
    pub settings: Settings,
    /// Checkout directory name derived from the repository URL.
    pub repository_name: Option<String>,
}

// === Repository types ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncAction {
    Cloned,
    Pulled,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SyncResponse {
    pub action: SyncAction,
    pub repository: String,
    pub output: String,
}

// === File types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct FileListResponse {
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenFileRequest {
    pub file: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableSummary {
    pub title: String,
    pub columns: Vec<String>,
    pub row_count: usize,
}

impl From<&Document> for TableSummary {
    fn from(doc: &Document) -> Self {
        Self {
            title: doc.title.clone(),
            columns: doc.columns.clone(),
            row_count: doc.rows.len(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenFileResponse {
    pub file: String,
    pub tables: Vec<TableSummary>,
    /// Column names across all tables, most frequent first.
    pub columns: Vec<String>,
    pub default_query_column: Option<String>,
    pub default_answer_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

// === Quiz types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct StartQuizRequest {
    /// Table title; omitted to practice every table.
    pub table: Option<String>,
    pub query_column: String,
    pub answer_column: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StartQuizResponse {
    pub quiz: Option<QuizView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// What the client shows for the item under the cursor.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizView {
    pub table: Option<String>,
    /// 1-based position within the pass.
    pub position: usize,
    pub total: usize,
    pub query_column: String,
    pub query: String,
    pub answer_column: String,
    /// Only present once the answer has been revealed.
    pub answer: Option<String>,
    pub correct: u32,
    pub incorrect: u32,
    pub revealed: bool,
    pub perfect: bool,
}

impl QuizView {
    pub fn from_quiz(quiz: &ActiveQuiz) -> Self {
        let session = &quiz.session;
        let value = |column: &str| session.current_value(column).unwrap_or("").to_string();
        let table = match &quiz.table {
            TableSelection::All => None,
            TableSelection::Title(title) => Some(title.clone()),
        };

        Self {
            table,
            position: session.cursor() + 1,
            total: session.len(),
            query_column: quiz.query_column.clone(),
            query: value(&quiz.query_column),
            answer_column: quiz.answer_column.clone(),
            answer: session.is_revealed().then(|| value(&quiz.answer_column)),
            correct: session.correct_count(),
            incorrect: session.incorrect_count(),
            revealed: session.is_revealed(),
            perfect: session.is_perfect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub expected: String,
    pub quiz: QuizView,
}
