use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::notes::dto::NotePayload;
use crate::store::OwnedTable;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl OwnedTable for Note {
    const TABLE: &'static str = "notes";
    const NAME: &'static str = "Note";
}

impl Note {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Note>> {
        let rows = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, user_id, title, content, category, tags, created_at, updated_at
            FROM notes
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(db: &PgPool, user_id: Uuid, body: &NotePayload) -> anyhow::Result<Note> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (user_id, title, content, category, tags)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, content, category, tags, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&body.title)
        .bind(&body.content)
        .bind(&body.category)
        .bind(&body.tags)
        .fetch_one(db)
        .await?;
        Ok(note)
    }

    /// Full replace; updated_at is refreshed server-side on every update.
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        body: &NotePayload,
    ) -> anyhow::Result<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET title = $3, content = $4, category = $5, tags = $6, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, content, category, tags, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&body.title)
        .bind(&body.content)
        .bind(&body.category)
        .bind(&body.tags)
        .fetch_optional(db)
        .await?;
        Ok(note)
    }
}
