use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{
    analytics::{
        dto::{
            completion_rate, CompletionCounts, DashboardSummary, GoalStatusCount, HabitStats,
            TaskAnalytics,
        },
        repo,
    },
    auth::extractors::AuthUser,
    calendar::repo::CalendarEvent,
    error::ApiResult,
    files::repo::FileEntry,
    habits::repo::Habit,
    notes::repo::Note,
    state::AppState,
    store,
};

pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/analytics/dashboard", get(dashboard))
        .route("/analytics/tasks", get(task_analytics))
        .route("/analytics/goals", get(goal_analytics))
        .route("/analytics/habits", get(habit_analytics))
}

#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<DashboardSummary>> {
    let (task_total, task_completed) = repo::task_counts(&state.db, user_id).await?;
    let (goal_total, goal_completed) = repo::goal_counts(&state.db, user_id).await?;
    let habits = store::count_owned::<Habit>(&state.db, user_id).await?;
    let notes = store::count_owned::<Note>(&state.db, user_id).await?;
    let events = store::count_owned::<CalendarEvent>(&state.db, user_id).await?;
    let files = store::count_owned::<FileEntry>(&state.db, user_id).await?;

    Ok(Json(DashboardSummary {
        tasks: CompletionCounts {
            total: task_total,
            completed: task_completed,
        },
        goals: CompletionCounts {
            total: goal_total,
            completed: goal_completed,
        },
        habits,
        notes,
        events,
        files,
    }))
}

#[instrument(skip(state))]
pub async fn task_analytics(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<TaskAnalytics>> {
    let (total, completed) = repo::task_counts(&state.db, user_id).await?;
    let per_day = repo::task_activity(&state.db, user_id).await?;

    Ok(Json(TaskAnalytics {
        total,
        completed,
        completion_rate: completion_rate(total, completed),
        per_day,
    }))
}

#[instrument(skip(state))]
pub async fn goal_analytics(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Vec<GoalStatusCount>>> {
    let histogram = repo::goal_status_histogram(&state.db, user_id).await?;
    Ok(Json(histogram))
}

#[instrument(skip(state))]
pub async fn habit_analytics(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Vec<HabitStats>>> {
    let stats = repo::habit_stats(&state.db, user_id).await?;
    Ok(Json(stats))
}
