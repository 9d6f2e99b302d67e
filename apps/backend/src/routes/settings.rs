//! Settings endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{Settings, SettingsResponse, UpdateSettingsRequest};
use crate::services::repository::repository_name;
use crate::AppState;

fn to_response(settings: Settings) -> SettingsResponse {
    let repository_name = repository_name(&settings.repository_url);
    SettingsResponse {
        settings,
        repository_name,
    }
}

/// GET /api/settings
pub async fn get(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(to_response(state.settings.load().await))
}

/// PUT /api/settings
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>> {
    // Get current settings
    let mut current = state.settings.load().await;

    // Apply updates
    if let Some(repository_url) = request.repository_url {
        current.repository_url = repository_url.trim().to_string();
    }
    if let Some(query_columns) = request.query_columns {
        current.query_columns = query_columns.into_columns();
    }
    if let Some(answer_columns) = request.answer_columns {
        current.answer_columns = answer_columns.into_columns();
    }

    // Save
    state.settings.save(&current).await?;

    Ok(Json(to_response(current)))
}
