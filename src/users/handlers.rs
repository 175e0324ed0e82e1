use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::{error, instrument};

use crate::{
    auth::{dto::PublicUser, extractors::AuthUser, repo::User},
    error::{ApiError, ApiResult},
    state::AppState,
    users::{dto::UpdateProfile, repo},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/profile", get(get_profile).put(update_profile))
        .route("/users/settings", get(get_settings).put(update_settings))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<PublicUser>> {
    let user = User::find_by_id(&state.db, user_id).await?.ok_or_else(|| {
        error!(user_id = %user_id, "user not found");
        ApiError::Unauthorized("User not found".into())
    })?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfile>,
) -> ApiResult<Json<PublicUser>> {
    let user = repo::update_full_name(&state.db, user_id, &payload.full_name)
        .await?
        .ok_or_else(|| {
            error!(user_id = %user_id, "user not found");
            ApiError::Unauthorized("User not found".into())
        })?;
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn get_settings(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<serde_json::Value>> {
    let settings = repo::get_settings(&state.db, user_id)
        .await?
        .unwrap_or_else(|| serde_json::json!({}));
    Ok(Json(settings))
}

#[instrument(skip(state, payload))]
pub async fn update_settings(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<serde_json::Value>,
) -> ApiResult<Json<serde_json::Value>> {
    let stored = repo::upsert_settings(&state.db, user_id, &payload).await?;
    Ok(Json(stored))
}
