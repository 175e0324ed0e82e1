use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::store::OwnedTable;
use crate::tasks::dto::TaskPayload;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub priority: String,
    pub completed: bool,
    pub created_at: OffsetDateTime,
}

impl OwnedTable for Task {
    const TABLE: &'static str = "tasks";
    const NAME: &'static str = "Task";
}

impl Task {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Task>> {
        let rows = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, due_date, priority, completed, created_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(db: &PgPool, user_id: Uuid, body: &TaskPayload) -> anyhow::Result<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, title, description, due_date, priority, completed)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, title, description, due_date, priority, completed, created_at
            "#,
        )
        .bind(user_id)
        .bind(&body.title)
        .bind(&body.description)
        .bind(body.due_date)
        .bind(&body.priority)
        .bind(body.completed)
        .fetch_one(db)
        .await?;
        Ok(task)
    }

    /// Full-field replace scoped by owner. None means no row matched.
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        body: &TaskPayload,
    ) -> anyhow::Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $3, description = $4, due_date = $5, priority = $6, completed = $7
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, description, due_date, priority, completed, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&body.title)
        .bind(&body.description)
        .bind(body.due_date)
        .bind(&body.priority)
        .bind(body.completed)
        .fetch_optional(db)
        .await?;
        Ok(task)
    }
}
