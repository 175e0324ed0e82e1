use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    calendar::{
        dto::{EventPayload, EventWindow},
        repo::CalendarEvent,
    },
    error::ApiResult,
    state::AppState,
    store::{self, OwnedTable},
};

pub fn calendar_routes() -> Router<AppState> {
    Router::new()
        .route("/calendar", get(list_events).post(create_event))
        .route("/calendar/:id", put(update_event).delete(delete_event))
}

#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(window): Query<EventWindow>,
) -> ApiResult<Json<Vec<CalendarEvent>>> {
    let events =
        CalendarEvent::list_by_user(&state.db, user_id, window.start_date, window.end_date)
            .await?;
    Ok(Json(events))
}

#[instrument(skip(state, payload))]
pub async fn create_event(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<EventPayload>,
) -> ApiResult<(StatusCode, Json<CalendarEvent>)> {
    let event = CalendarEvent::create(&state.db, user_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[instrument(skip(state, payload))]
pub async fn update_event(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EventPayload>,
) -> ApiResult<Json<CalendarEvent>> {
    let event = CalendarEvent::update(&state.db, user_id, id, &payload).await?;
    Ok(Json(store::found_or(event, CalendarEvent::NAME)?))
}

#[instrument(skip(state))]
pub async fn delete_event(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    store::delete_owned::<CalendarEvent>(&state.db, id, user_id).await?;
    Ok(Json(store::deleted(CalendarEvent::NAME)))
}
