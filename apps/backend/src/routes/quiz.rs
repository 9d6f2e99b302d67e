//! Quiz endpoints

use axum::{extract::State, Extension, Json};

use memo_core::{QuizError, TableSelection};

use crate::error::Result;
use crate::models::{AnswerRequest, AnswerResponse, QuizView, StartQuizRequest, StartQuizResponse};
use crate::routes::auth::AuthenticatedSession;
use crate::AppState;

/// POST /api/quiz/start
/// Starts a fresh quiz over one table, or every table when none is given
pub async fn start(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedSession>,
    Json(request): Json<StartQuizRequest>,
) -> Result<Json<StartQuizResponse>> {
    let table = TableSelection::from_title(request.table);

    let response = state
        .sessions
        .with_session(&auth.token, |session| {
            match session.start_quiz(table.clone(), request.query_column, request.answer_column) {
                Ok(quiz) => {
                    tracing::info!("Selected table {:?} ({} items)", table, quiz.session.len());
                    Ok(StartQuizResponse {
                        quiz: Some(QuizView::from_quiz(quiz)),
                        warning: None,
                    })
                }
                Err(QuizError::EmptyTable) => {
                    tracing::warn!("Empty contents in table {:?}", table);
                    Ok(StartQuizResponse {
                        quiz: session.quiz.as_ref().map(QuizView::from_quiz),
                        warning: Some("Selected table has no rows".to_string()),
                    })
                }
                Err(e) => Err(e.into()),
            }
        })
        .await?;

    Ok(Json(response))
}

/// GET /api/quiz/current
pub async fn current(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedSession>,
) -> Result<Json<QuizView>> {
    let view = state
        .sessions
        .with_session(&auth.token, |session| {
            Ok(QuizView::from_quiz(session.quiz()?))
        })
        .await?;

    Ok(Json(view))
}

/// POST /api/quiz/answer
pub async fn answer(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedSession>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    let response = state
        .sessions
        .with_session(&auth.token, |session| {
            let quiz = session.quiz_mut()?;
            let correct = quiz
                .session
                .submit_answer(&quiz.answer_column, &request.answer)?;
            let expected = quiz
                .session
                .current_value(&quiz.answer_column)
                .unwrap_or("")
                .to_string();

            Ok(AnswerResponse {
                correct,
                expected,
                quiz: QuizView::from_quiz(quiz),
            })
        })
        .await?;

    Ok(Json(response))
}

/// POST /api/quiz/next
pub async fn next(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedSession>,
) -> Result<Json<QuizView>> {
    let view = state
        .sessions
        .with_session(&auth.token, |session| {
            let quiz = session.quiz_mut()?;
            quiz.session.advance();
            Ok(QuizView::from_quiz(quiz))
        })
        .await?;

    Ok(Json(view))
}
