use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::files::dto::FilePayload;
use crate::store::OwnedTable;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub mime_type: String,
    pub size: i64,
    pub content_ref: String,
    pub category: Option<String>,
    pub created_at: OffsetDateTime,
}

impl OwnedTable for FileEntry {
    const TABLE: &'static str = "files";
    const NAME: &'static str = "File";
}

impl FileEntry {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<FileEntry>> {
        let rows = sqlx::query_as::<_, FileEntry>(
            r#"
            SELECT id, user_id, name, mime_type, size, content_ref, category, created_at
            FROM files
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        body: &FilePayload,
    ) -> anyhow::Result<FileEntry> {
        let file = sqlx::query_as::<_, FileEntry>(
            r#"
            INSERT INTO files (user_id, name, mime_type, size, content_ref, category)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, name, mime_type, size, content_ref, category, created_at
            "#,
        )
        .bind(user_id)
        .bind(&body.name)
        .bind(&body.mime_type)
        .bind(body.size)
        .bind(&body.content_ref)
        .bind(&body.category)
        .fetch_one(db)
        .await?;
        Ok(file)
    }
}
