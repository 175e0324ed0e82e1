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
    goals::{dto::GoalPayload, repo::Goal},
    state::AppState,
    store::{self, OwnedTable},
};

pub fn goal_routes() -> Router<AppState> {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route("/goals/:id", put(update_goal).delete(delete_goal))
}

#[instrument(skip(state))]
pub async fn list_goals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = Goal::list_by_user(&state.db, user_id).await?;
    Ok(Json(goals))
}

#[instrument(skip(state, payload))]
pub async fn create_goal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<GoalPayload>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let goal = Goal::create(&state.db, user_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

#[instrument(skip(state, payload))]
pub async fn update_goal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<GoalPayload>,
) -> ApiResult<Json<Goal>> {
    let goal = Goal::update(&state.db, user_id, id, &payload).await?;
    Ok(Json(store::found_or(goal, Goal::NAME)?))
}

#[instrument(skip(state))]
pub async fn delete_goal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    store::delete_owned::<Goal>(&state.db, id, user_id).await?;
    Ok(Json(store::deleted(Goal::NAME)))
}
