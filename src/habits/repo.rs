use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::habits::dto::HabitPayload;
use crate::store::OwnedTable;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Habit {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub frequency: String,
    pub target_count: i32,
    pub created_at: OffsetDateTime,
}

/// One tracked (habit, date) pair. Unique per habit and date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HabitEntry {
    pub id: Uuid,
    pub habit_id: Uuid,
    pub date: Date,
    pub count: i32,
    pub created_at: OffsetDateTime,
}

impl OwnedTable for Habit {
    const TABLE: &'static str = "habits";
    const NAME: &'static str = "Habit";
}

impl Habit {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Habit>> {
        let rows = sqlx::query_as::<_, Habit>(
            r#"
            SELECT id, user_id, name, description, frequency, target_count, created_at
            FROM habits
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_owned(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Habit>> {
        let habit = sqlx::query_as::<_, Habit>(
            r#"
            SELECT id, user_id, name, description, frequency, target_count, created_at
            FROM habits
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(habit)
    }

    pub async fn create(db: &PgPool, user_id: Uuid, body: &HabitPayload) -> anyhow::Result<Habit> {
        let habit = sqlx::query_as::<_, Habit>(
            r#"
            INSERT INTO habits (user_id, name, description, frequency, target_count)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, description, frequency, target_count, created_at
            "#,
        )
        .bind(user_id)
        .bind(&body.name)
        .bind(&body.description)
        .bind(&body.frequency)
        .bind(body.target_count)
        .fetch_one(db)
        .await?;
        Ok(habit)
    }

    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        body: &HabitPayload,
    ) -> anyhow::Result<Option<Habit>> {
        let habit = sqlx::query_as::<_, Habit>(
            r#"
            UPDATE habits
            SET name = $3, description = $4, frequency = $5, target_count = $6
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, description, frequency, target_count, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&body.name)
        .bind(&body.description)
        .bind(&body.frequency)
        .bind(body.target_count)
        .fetch_optional(db)
        .await?;
        Ok(habit)
    }
}

impl HabitEntry {
    /// Insert-or-overwrite the count for (habit_id, date). Last write wins.
    pub async fn upsert(
        db: &PgPool,
        habit_id: Uuid,
        date: Date,
        count: i32,
    ) -> anyhow::Result<HabitEntry> {
        let entry = sqlx::query_as::<_, HabitEntry>(
            r#"
            INSERT INTO habit_tracking (habit_id, date, count)
            VALUES ($1, $2, $3)
            ON CONFLICT (habit_id, date) DO UPDATE SET count = EXCLUDED.count
            RETURNING id, habit_id, date, count, created_at
            "#,
        )
        .bind(habit_id)
        .bind(date)
        .bind(count)
        .fetch_one(db)
        .await?;
        Ok(entry)
    }
}
