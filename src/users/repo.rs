use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::repo::User;

pub async fn update_full_name(
    db: &PgPool,
    user_id: Uuid,
    full_name: &str,
) -> anyhow::Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET full_name = $2
        WHERE id = $1
        RETURNING id, email, password_hash, full_name, created_at
        "#,
    )
    .bind(user_id)
    .bind(full_name)
    .fetch_optional(db)
    .await?;
    Ok(user)
}

pub async fn get_settings(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<serde_json::Value>> {
    let settings: Option<(serde_json::Value,)> = sqlx::query_as(
        r#"
        SELECT settings
        FROM user_settings
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(settings.map(|(s,)| s))
}

/// Whole-blob upsert keyed by user. A write replaces the entire settings
/// object, no merge.
pub async fn upsert_settings(
    db: &PgPool,
    user_id: Uuid,
    settings: &serde_json::Value,
) -> anyhow::Result<serde_json::Value> {
    let (stored,): (serde_json::Value,) = sqlx::query_as(
        r#"
        INSERT INTO user_settings (user_id, settings)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET settings = EXCLUDED.settings, updated_at = NOW()
        RETURNING settings
        "#,
    )
    .bind(user_id)
    .bind(settings)
    .fetch_one(db)
    .await?;
    Ok(stored)
}
