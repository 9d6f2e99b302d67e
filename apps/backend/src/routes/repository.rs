//! Repository sync endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::SyncResponse;
use crate::AppState;

/// POST /api/repository/sync
/// Clones the configured repository, or pulls it when already checked out
pub async fn sync(State(state): State<AppState>) -> Result<Json<SyncResponse>> {
    let settings = state.settings.load().await;
    let outcome = state.repository.sync(&settings.repository_url).await?;

    Ok(Json(SyncResponse {
        action: outcome.action,
        repository: outcome.name,
        output: outcome.output,
    }))
}
