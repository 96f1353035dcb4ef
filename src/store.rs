//! items table DDL and CRUD execution against SQLite.

use crate::error::AppError;
use crate::model::Item;
use chrono::Utc;
use sqlx::SqlitePool;

/// Hard cap on page size, regardless of what the caller asks for.
pub const PER_PAGE_MAX: u32 = 100;

/// Create the `items` table if absent. Idempotent; safe against an
/// already-initialized store. AUTOINCREMENT keeps deleted ids from being
/// reassigned.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub struct ItemStore;

impl ItemStore {
    /// Insert one item. `created_at == updated_at` at birth; the store
    /// assigns the id.
    pub async fn create(
        pool: &SqlitePool,
        name: &str,
        description: &str,
    ) -> Result<Item, AppError> {
        let now = Utc::now();
        tracing::debug!(name = %name, "insert item");
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;
        Ok(item)
    }

    /// Fetch one item by primary key. Absence is not an error.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Item>, AppError> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, description, created_at, updated_at FROM items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(item)
    }

    /// List one page, newest first, plus the total row count. `per_page` is
    /// clamped to [1, 100] and `page` floored to 1; a page past the end
    /// yields an empty vec with the total still correct.
    pub async fn list(
        pool: &SqlitePool,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<Item>, u64), AppError> {
        let per_page = per_page.clamp(1, PER_PAGE_MAX);
        let page = page.max(1);
        let offset = (page as i64 - 1) * per_page as i64;
        tracing::debug!(page, per_page, "list items");

        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM items
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(per_page as i64)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await?;
        Ok((items, total as u64))
    }

    /// Apply a partial update: only supplied fields change, `updated_at`
    /// always refreshes. Returns None when the id does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Item>, AppError> {
        let now = Utc::now();
        tracing::debug!(id, "update item");
        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = COALESCE(?, name),
                description = COALESCE(?, description),
                updated_at = ?
            WHERE id = ?
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(now)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(item)
    }

    /// Hard delete. Returns false when the id does not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete item");
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
