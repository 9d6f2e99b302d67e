//! Client session registration and status endpoints

use axum::{extract::State, Extension, Json};

use crate::error::Result;
use crate::models::{SessionRegisterResponse, SessionStatusResponse};
use crate::routes::auth::AuthenticatedSession;
use crate::AppState;

/// POST /api/session/register
/// Creates a new practice session and returns its token
pub async fn register(State(state): State<AppState>) -> Json<SessionRegisterResponse> {
    let (session_id, token) = state.sessions.register().await;

    tracing::info!("Registered new session: {}", session_id);

    Json(SessionRegisterResponse { session_id, token })
}

/// GET /api/session/status
pub async fn status(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedSession>,
) -> Result<Json<SessionStatusResponse>> {
    let status = state
        .sessions
        .with_session(&auth.token, |session| {
            Ok(SessionStatusResponse {
                session_id: session.id,
                created_at: session.created_at,
                last_seen_at: session.last_seen_at,
                file: session.file.clone(),
                document_count: session.documents.len(),
                quiz_active: session.quiz.is_some(),
            })
        })
        .await?;

    Ok(Json(status))
}
