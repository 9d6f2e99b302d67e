//! Per-client practice sessions.
//!
//! Every registered client owns its loaded documents and quiz; nothing is
//! shared between clients except the parser.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use memo_core::{select_rows, Document, QuizError, QuizSession, TableSelection};

use crate::error::{ApiError, Result};

/// A quiz in progress together with the columns it was started with.
#[derive(Debug)]
pub struct ActiveQuiz {
    pub table: TableSelection,
    pub query_column: String,
    pub answer_column: String,
    pub session: QuizSession,
}

#[derive(Debug)]
pub struct ClientSession {
    pub id: Uuid,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
    pub file: Option<String>,
    pub documents: Vec<Document>,
    pub quiz: Option<ActiveQuiz>,
}

impl ClientSession {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            token: Uuid::new_v4().to_string(),
            created_at: now,
            last_seen_at: now,
            file: None,
            documents: Vec::new(),
            quiz: None,
        }
    }

    /// Keep the documents of a freshly opened file.
    ///
    /// A file without tables leaves the previously loaded documents in place.
    pub fn open_file(&mut self, file: &str, documents: Vec<Document>) {
        if documents.is_empty() {
            return;
        }
        self.file = Some(file.to_string());
        self.documents = documents;
    }

    /// Restart the quiz over the selected rows with the given columns.
    ///
    /// An empty selection fails with `QuizError::EmptyTable` and keeps the
    /// current quiz.
    pub fn start_quiz(
        &mut self,
        table: TableSelection,
        query_column: String,
        answer_column: String,
    ) -> std::result::Result<&ActiveQuiz, QuizError> {
        let rows = select_rows(&self.documents, &table);

        let quiz = match self.quiz {
            Some(ref mut quiz) => {
                quiz.session.restart(&rows)?;
                quiz.table = table;
                quiz.query_column = query_column;
                quiz.answer_column = answer_column;
                quiz
            }
            None => self.quiz.insert(ActiveQuiz {
                session: QuizSession::start(&rows)?,
                table,
                query_column,
                answer_column,
            }),
        };
        Ok(&*quiz)
    }

    pub fn quiz(&self) -> Result<&ActiveQuiz> {
        self.quiz
            .as_ref()
            .ok_or_else(|| ApiError::NotFound("No quiz started".to_string()))
    }

    pub fn quiz_mut(&mut self) -> Result<&mut ActiveQuiz> {
        self.quiz
            .as_mut()
            .ok_or_else(|| ApiError::NotFound("No quiz started".to_string()))
    }
}

/// All client sessions, keyed by bearer token.
///
/// Sessions idle for longer than `ttl` are dropped on the next register or
/// authenticate call.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, ClientSession>>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Create a session and return its id and token.
    pub async fn register(&self) -> (Uuid, String) {
        let session = ClientSession::new();
        let registered = (session.id, session.token.clone());

        let mut sessions = self.sessions.lock().await;
        self.prune_expired(&mut sessions, Utc::now());
        sessions.insert(session.token.clone(), session);
        registered
    }

    /// Look up a session by token and mark it as seen.
    pub async fn authenticate(&self, token: &str) -> Option<Uuid> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().await;
        self.prune_expired(&mut sessions, now);

        let session = sessions.get_mut(token)?;
        session.last_seen_at = now;
        Some(session.id)
    }

    fn prune_expired(&self, sessions: &mut HashMap<String, ClientSession>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_seen_at <= self.ttl);

        let expired = before - sessions.len();
        if expired > 0 {
            tracing::info!("Expired {} idle sessions", expired);
        }
    }

    /// Run `f` against the session owning `token`.
    pub async fn with_session<T>(
        &self,
        token: &str,
        f: impl FnOnce(&mut ClientSession) -> Result<T>,
    ) -> Result<T> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .get_mut(token)
            .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;
        f(session)
    }

    pub async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
