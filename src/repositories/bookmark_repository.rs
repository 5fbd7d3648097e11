// src/repositories/bookmark_repository.rs

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{page::PageRequest, quiz::QuizListing},
    repositories::quiz_repository::{LISTING_FROM, QUIZ_COLUMNS},
};

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Subset of `quiz_ids` the user has bookmarked.
    async fn bookmarked_among(&self, user_id: i64, quiz_ids: &[i64]) -> AppResult<HashSet<i64>>;
    /// Adds the bookmark if missing, removes it otherwise. Returns the new state.
    async fn toggle(&self, user_id: i64, quiz_id: i64) -> AppResult<bool>;
    /// The user's bookmarked live quizzes, most recently bookmarked first.
    async fn list_quizzes(&self, user_id: i64, page: PageRequest) -> AppResult<(Vec<QuizListing>, i64)>;
}

pub struct PgBookmarkRepository {
    pool: PgPool,
}

impl PgBookmarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    async fn bookmarked_among(&self, user_id: i64, quiz_ids: &[i64]) -> AppResult<HashSet<i64>> {
        if quiz_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT quiz_id FROM bookmarks WHERE user_id = $1 AND quiz_id = ANY($2)",
        )
        .bind(user_id)
        .bind(quiz_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().collect())
    }

    async fn toggle(&self, user_id: i64, quiz_id: i64) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND quiz_id = $2")
            .bind(user_id)
            .bind(quiz_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if removed == 0 {
            sqlx::query(
                "INSERT INTO bookmarks (user_id, quiz_id) VALUES ($1, $2) ON CONFLICT (user_id, quiz_id) DO NOTHING",
            )
            .bind(user_id)
            .bind(quiz_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to add bookmark: {:?}", e);
                e
            })?;
        }

        tx.commit().await?;

        Ok(removed == 0)
    }

    async fn list_quizzes(&self, user_id: i64, page: PageRequest) -> AppResult<(Vec<QuizListing>, i64)> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM bookmarks b
            JOIN quizzes q ON q.id = b.quiz_id
            WHERE b.user_id = $1 AND q.is_deleted = FALSE
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        let sql = format!(
            r#"
            SELECT {QUIZ_COLUMNS} {LISTING_FROM}
            JOIN bookmarks b ON b.quiz_id = q.id
            WHERE b.user_id = $1 AND q.is_deleted = FALSE
            ORDER BY b.created_at DESC, b.id DESC
            LIMIT $2 OFFSET $3
            "#
        );
        let items = sqlx::query_as::<_, QuizListing>(&sql)
            .bind(user_id)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((items, total))
    }
}
