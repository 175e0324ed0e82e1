use sqlx::PgPool;
use uuid::Uuid;

use crate::analytics::dto::{DailyTaskActivity, GoalStatusCount, HabitStats};

pub async fn task_counts(db: &PgPool, user_id: Uuid) -> anyhow::Result<(i64, i64)> {
    let row: (i64, i64) = sqlx::query_as(
        r#"
        SELECT COUNT(*), COUNT(*) FILTER (WHERE completed)
        FROM tasks
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn goal_counts(db: &PgPool, user_id: Uuid) -> anyhow::Result<(i64, i64)> {
    let row: (i64, i64) = sqlx::query_as(
        r#"
        SELECT COUNT(*), COUNT(*) FILTER (WHERE status = 'completed')
        FROM goals
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Task creation/completion per day over the trailing 30 days.
pub async fn task_activity(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<DailyTaskActivity>> {
    let rows = sqlx::query_as::<_, DailyTaskActivity>(
        r#"
        SELECT created_at::date AS day,
               COUNT(*) AS created,
               COUNT(*) FILTER (WHERE completed) AS completed
        FROM tasks
        WHERE user_id = $1
          AND created_at >= NOW() - INTERVAL '30 days'
        GROUP BY created_at::date
        ORDER BY day
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn goal_status_histogram(
    db: &PgPool,
    user_id: Uuid,
) -> anyhow::Result<Vec<GoalStatusCount>> {
    let rows = sqlx::query_as::<_, GoalStatusCount>(
        r#"
        SELECT status, COUNT(*) AS count
        FROM goals
        WHERE user_id = $1
        GROUP BY status
        ORDER BY status
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Entry count and average count per habit. Habits without tracking rows
/// come back with zero entries and a NULL average.
pub async fn habit_stats(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<HabitStats>> {
    let rows = sqlx::query_as::<_, HabitStats>(
        r#"
        SELECT h.id AS habit_id,
               h.name,
               COUNT(t.id) AS entries,
               AVG(t.count)::float8 AS average_count
        FROM habits h
        LEFT JOIN habit_tracking t ON t.habit_id = h.id
        WHERE h.user_id = $1
        GROUP BY h.id, h.name
        ORDER BY h.name
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
