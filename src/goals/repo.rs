use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::goals::dto::GoalPayload;
use crate::store::OwnedTable;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub target_value: i32,
    pub current_value: i32,
    pub deadline: Option<Date>,
    pub category: String,
    pub status: String,
    pub created_at: OffsetDateTime,
}

impl OwnedTable for Goal {
    const TABLE: &'static str = "goals";
    const NAME: &'static str = "Goal";
}

impl Goal {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Goal>> {
        let rows = sqlx::query_as::<_, Goal>(
            r#"
            SELECT id, user_id, title, description, target_value, current_value,
                   deadline, category, status, created_at
            FROM goals
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(db: &PgPool, user_id: Uuid, body: &GoalPayload) -> anyhow::Result<Goal> {
        let goal = sqlx::query_as::<_, Goal>(
            r#"
            INSERT INTO goals (user_id, title, description, target_value, current_value,
                               deadline, category, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, title, description, target_value, current_value,
                      deadline, category, status, created_at
            "#,
        )
        .bind(user_id)
        .bind(&body.title)
        .bind(&body.description)
        .bind(body.target_value)
        .bind(body.current_value)
        .bind(body.deadline)
        .bind(&body.category)
        .bind(&body.status)
        .fetch_one(db)
        .await?;
        Ok(goal)
    }

    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        body: &GoalPayload,
    ) -> anyhow::Result<Option<Goal>> {
        let goal = sqlx::query_as::<_, Goal>(
            r#"
            UPDATE goals
            SET title = $3, description = $4, target_value = $5, current_value = $6,
                deadline = $7, category = $8, status = $9
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, description, target_value, current_value,
                      deadline, category, status, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&body.title)
        .bind(&body.description)
        .bind(body.target_value)
        .bind(body.current_value)
        .bind(body.deadline)
        .bind(&body.category)
        .bind(&body.status)
        .fetch_optional(db)
        .await?;
        Ok(goal)
    }
}
