use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiResult,
    habits::{
        dto::{HabitPayload, TrackRequest},
        repo::{Habit, HabitEntry},
    },
    state::AppState,
    store::{self, OwnedTable},
};

pub fn habit_routes() -> Router<AppState> {
    Router::new()
        .route("/habits", get(list_habits).post(create_habit))
        .route("/habits/:id", put(update_habit).delete(delete_habit))
        .route("/habits/:id/track", post(track_habit))
}

#[instrument(skip(state))]
pub async fn list_habits(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Vec<Habit>>> {
    let habits = Habit::list_by_user(&state.db, user_id).await?;
    Ok(Json(habits))
}

#[instrument(skip(state, payload))]
pub async fn create_habit(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<HabitPayload>,
) -> ApiResult<(StatusCode, Json<Habit>)> {
    let habit = Habit::create(&state.db, user_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(habit)))
}

#[instrument(skip(state, payload))]
pub async fn update_habit(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<HabitPayload>,
) -> ApiResult<Json<Habit>> {
    let habit = Habit::update(&state.db, user_id, id, &payload).await?;
    Ok(Json(store::found_or(habit, Habit::NAME)?))
}

#[instrument(skip(state))]
pub async fn delete_habit(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    store::delete_owned::<Habit>(&state.db, id, user_id).await?;
    Ok(Json(store::deleted(Habit::NAME)))
}

/// The habit must belong to the caller before its tracking row is touched.
#[instrument(skip(state, payload))]
pub async fn track_habit(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<TrackRequest>,
) -> ApiResult<Json<HabitEntry>> {
    let habit = Habit::find_owned(&state.db, user_id, id).await?;
    let habit = store::found_or(habit, Habit::NAME)?;

    let entry = HabitEntry::upsert(&state.db, habit.id, payload.date, payload.count).await?;
    Ok(Json(entry))
}
