use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiResult,
    files::{dto::FilePayload, repo::FileEntry},
    state::AppState,
    store::{self, OwnedTable},
};

pub fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(list_files).post(create_file))
        .route("/files/:id", delete(delete_file))
}

#[instrument(skip(state))]
pub async fn list_files(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Vec<FileEntry>>> {
    let files = FileEntry::list_by_user(&state.db, user_id).await?;
    Ok(Json(files))
}

#[instrument(skip(state, payload))]
pub async fn create_file(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<FilePayload>,
) -> ApiResult<(StatusCode, Json<FileEntry>)> {
    let file = FileEntry::create(&state.db, user_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(file)))
}

#[instrument(skip(state))]
pub async fn delete_file(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    store::delete_owned::<FileEntry>(&state.db, id, user_id).await?;
    Ok(Json(store::deleted(FileEntry::NAME)))
}
