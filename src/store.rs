use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;

/// The ownership discipline shared by every resource: rows carry `user_id`
/// and every read/update/delete is scoped by it. Implementors get the
/// scoped delete and the zero-rows-means-404 rule from one place instead of
/// re-spelling the WHERE clause per controller.
pub trait OwnedTable {
    const TABLE: &'static str;
    const NAME: &'static str;
}

/// Delete a row owned by `user_id`. Zero affected rows is NotFound, never a
/// silent success.
pub async fn delete_owned<R: OwnedTable>(
    db: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<(), ApiError> {
    let query = format!("DELETE FROM {} WHERE id = $1 AND user_id = $2", R::TABLE);
    let result = sqlx::query(&query)
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!("{} not found", R::NAME)));
    }
    Ok(())
}

/// Count rows owned by `user_id`.
pub async fn count_owned<R: OwnedTable>(db: &PgPool, user_id: Uuid) -> Result<i64, ApiError> {
    let query = format!("SELECT COUNT(*) FROM {} WHERE user_id = $1", R::TABLE);
    let (count,): (i64,) = sqlx::query_as(&query).bind(user_id).fetch_one(db).await?;
    Ok(count)
}

/// Map an absent ownership-scoped row to NotFound.
pub fn found_or<T>(row: Option<T>, name: &str) -> Result<T, ApiError> {
    row.ok_or_else(|| ApiError::NotFound(format!("{name} not found")))
}

/// Confirmation body returned by every delete endpoint.
pub fn deleted(name: &str) -> serde_json::Value {
    serde_json::json!({ "message": format!("{name} deleted") })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_or_passes_through_some() {
        let row = found_or(Some(7), "Task").expect("some is ok");
        assert_eq!(row, 7);
    }

    #[test]
    fn found_or_maps_none_to_not_found() {
        let err = found_or::<i32>(None, "Task").unwrap_err();
        assert_eq!(err.to_string(), "Task not found");
        assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn deleted_confirmation_shape() {
        let body = deleted("Note");
        assert_eq!(body["message"], "Note deleted");
    }
}
