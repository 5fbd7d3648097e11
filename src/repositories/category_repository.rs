// src/repositories/category_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{error::AppResult, models::category::Category};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_live_by_id(&self, id: i64) -> AppResult<Option<Category>>;
    /// Non-deleted category holding exactly this name.
    async fn find_live_by_name(&self, name: &str) -> AppResult<Option<Category>>;
    async fn create(
        &self,
        creator_id: i64,
        name: &str,
        description: &str,
        category_pic: Option<&str>,
    ) -> AppResult<Category>;
    /// Returns `None` if no live category has this id.
    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        category_pic: Option<&str>,
    ) -> AppResult<Option<Category>>;
    /// Flips `is_deleted`; returns false if no live row matched.
    async fn soft_delete(&self, id: i64) -> AppResult<bool>;
    async fn list_live(&self) -> AppResult<Vec<Category>>;
    async fn count_live(&self) -> AppResult<i64>;
}

const CATEGORY_COLUMNS: &str =
    "id, name, description, category_pic, creator_id, is_deleted, created_at, updated_at";

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_live_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, category_pic, creator_id, is_deleted, created_at, updated_at
            FROM categories
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn find_live_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE name = $1 AND is_deleted = FALSE");
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    async fn create(
        &self,
        creator_id: i64,
        name: &str,
        description: &str,
        category_pic: Option<&str>,
    ) -> AppResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description, category_pic, creator_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, category_pic, creator_id, is_deleted, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(category_pic)
        .bind(creator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            e
        })?;

        Ok(category)
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        category_pic: Option<&str>,
    ) -> AppResult<Option<Category>> {
        let sql = format!(
            r#"
            UPDATE categories SET
                name = $1,
                description = $2,
                category_pic = $3,
                updated_at = NOW()
            WHERE id = $4 AND is_deleted = FALSE
            RETURNING {CATEGORY_COLUMNS}
            "#
        );
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(name)
            .bind(description)
            .bind(category_pic)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update category {}: {:?}", id, e);
                e
            })?;

        Ok(category)
    }

    async fn soft_delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE categories SET is_deleted = TRUE, updated_at = NOW() WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_live(&self) -> AppResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, category_pic, creator_id, is_deleted, created_at, updated_at
            FROM categories
            WHERE is_deleted = FALSE
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn count_live(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE is_deleted = FALSE")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
