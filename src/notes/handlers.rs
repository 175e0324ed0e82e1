use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiResult,
    notes::{dto::NotePayload, repo::Note},
    state::AppState,
    store::{self, OwnedTable},
};

pub fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/:id", put(update_note).delete(delete_note))
}

#[instrument(skip(state))]
pub async fn list_notes(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Vec<Note>>> {
    let notes = Note::list_by_user(&state.db, user_id).await?;
    Ok(Json(notes))
}

#[instrument(skip(state, payload))]
pub async fn create_note(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<NotePayload>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let note = Note::create(&state.db, user_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[instrument(skip(state, payload))]
pub async fn update_note(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<NotePayload>,
) -> ApiResult<Json<Note>> {
    let note = Note::update(&state.db, user_id, id, &payload).await?;
    Ok(Json(store::found_or(note, Note::NAME)?))
}

#[instrument(skip(state))]
pub async fn delete_note(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    store::delete_owned::<Note>(&state.db, id, user_id).await?;
    Ok(Json(store::deleted(Note::NAME)))
}
