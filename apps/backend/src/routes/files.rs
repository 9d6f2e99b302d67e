//! Markdown file and document endpoints

use axum::{extract::State, Extension, Json};

use memo_core::{default_column, rank_columns};

use crate::error::Result;
use crate::models::{Document, FileListResponse, OpenFileRequest, OpenFileResponse, TableSummary};
use crate::routes::auth::AuthenticatedSession;
use crate::services::library::{library_dir, list_markdown_files, load_documents};
use crate::services::repository::SyncError;
use crate::AppState;

/// GET /api/files
pub async fn list(State(state): State<AppState>) -> Result<Json<FileListResponse>> {
    let settings = state.settings.load().await;
    let dir = match library_dir(&state.config.workspace_dir, &settings) {
        Ok(dir) => dir,
        Err(e @ SyncError::MissingUrl) => {
            tracing::warn!("{}", e);
            return Ok(Json(FileListResponse {
                files: Vec::new(),
                warning: Some(e.to_string()),
            }));
        }
        Err(e) => return Err(e.into()),
    };
    let files = list_markdown_files(&dir).await?;

    let warning = if files.is_empty() {
        tracing::warn!("No markdown files in {}", dir.display());
        Some("No markdown files found".to_string())
    } else {
        None
    };

    Ok(Json(FileListResponse { files, warning }))
}

/// POST /api/files/open
/// Parses a file into the session and suggests query/answer columns
pub async fn open(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedSession>,
    Json(request): Json<OpenFileRequest>,
) -> Result<Json<OpenFileResponse>> {
    let settings = state.settings.load().await;
    let dir = library_dir(&state.config.workspace_dir, &settings)?;
    let documents = load_documents(&dir, &request.file).await?;

    let columns = rank_columns(&documents);
    let pick = |defaults: &[String]| default_column(&columns, defaults).map(|i| columns[i].clone());
    let default_query_column = pick(&settings.query_columns);
    let default_answer_column = pick(&settings.answer_columns);

    let tables: Vec<TableSummary> = documents.iter().map(TableSummary::from).collect();
    let warning = if documents.is_empty() {
        tracing::warn!("No tables found in {}", request.file);
        Some(format!("No tables found in {}", request.file))
    } else {
        None
    };

    state
        .sessions
        .with_session(&auth.token, |session| {
            session.open_file(&request.file, documents);
            Ok(())
        })
        .await?;

    Ok(Json(OpenFileResponse {
        file: request.file,
        tables,
        columns,
        default_query_column,
        default_answer_column,
        warning,
    }))
}

/// GET /api/documents
/// Diagnostic dump of the documents loaded in this session
pub async fn documents(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedSession>,
) -> Result<Json<Vec<Document>>> {
    let documents = state
        .sessions
        .with_session(&auth.token, |session| Ok(session.documents.clone()))
        .await?;

    Ok(Json(documents))
}
