use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::calendar::dto::EventPayload;
use crate::store::OwnedTable;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
    pub location: Option<String>,
    pub category: String,
    pub created_at: OffsetDateTime,
}

impl OwnedTable for CalendarEvent {
    const TABLE: &'static str = "calendar_events";
    const NAME: &'static str = "Event";
}

impl CalendarEvent {
    /// Events in chronological order, optionally bounded to a date window on
    /// the start day (inclusive on both ends).
    pub async fn list_by_user(
        db: &PgPool,
        user_id: Uuid,
        start_date: Option<Date>,
        end_date: Option<Date>,
    ) -> anyhow::Result<Vec<CalendarEvent>> {
        let rows = sqlx::query_as::<_, CalendarEvent>(
            r#"
            SELECT id, user_id, title, description, start_time, end_time,
                   location, category, created_at
            FROM calendar_events
            WHERE user_id = $1
              AND ($2::date IS NULL OR start_time::date >= $2)
              AND ($3::date IS NULL OR start_time::date <= $3)
            ORDER BY start_time ASC
            "#,
        )
        .bind(user_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        body: &EventPayload,
    ) -> anyhow::Result<CalendarEvent> {
        let event = sqlx::query_as::<_, CalendarEvent>(
            r#"
            INSERT INTO calendar_events (user_id, title, description, start_time, end_time,
                                         location, category)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, title, description, start_time, end_time,
                      location, category, created_at
            "#,
        )
        .bind(user_id)
        .bind(&body.title)
        .bind(&body.description)
        .bind(body.start_time)
        .bind(body.end_time)
        .bind(&body.location)
        .bind(&body.category)
        .fetch_one(db)
        .await?;
        Ok(event)
    }

    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        body: &EventPayload,
    ) -> anyhow::Result<Option<CalendarEvent>> {
        let event = sqlx::query_as::<_, CalendarEvent>(
            r#"
            UPDATE calendar_events
            SET title = $3, description = $4, start_time = $5, end_time = $6,
                location = $7, category = $8
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, description, start_time, end_time,
                      location, category, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&body.title)
        .bind(&body.description)
        .bind(body.start_time)
        .bind(body.end_time)
        .bind(&body.location)
        .bind(&body.category)
        .fetch_optional(db)
        .await?;
        Ok(event)
    }
}
