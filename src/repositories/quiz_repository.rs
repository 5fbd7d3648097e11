// src/repositories/quiz_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::quiz::{Quiz, QuizDraft, QuizFilter, QuizListing},
    utils::sort::order_by_clause,
};

#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Non-deleted quiz by id.
    async fn find_live_by_id(&self, id: i64) -> AppResult<Option<Quiz>>;
    /// Non-deleted quiz holding exactly this title.
    async fn find_live_by_title(&self, title: &str) -> AppResult<Option<Quiz>>;
    /// Non-deleted quiz by id, joined with category and creator names.
    async fn find_listing(&self, id: i64) -> AppResult<Option<QuizListing>>;
    async fn create(&self, creator_id: i64, draft: &QuizDraft) -> AppResult<Quiz>;
    async fn update(&self, id: i64, draft: &QuizDraft) -> AppResult<Option<Quiz>>;
    /// Flips `is_deleted`; returns false if no live row matched.
    async fn soft_delete(&self, id: i64) -> AppResult<bool>;
    /// One page of live quizzes matching the filter, plus the total match count.
    async fn filter(&self, filter: &QuizFilter) -> AppResult<(Vec<QuizListing>, i64)>;
    async fn count_live_by_creator(&self, creator_id: i64) -> AppResult<i64>;
}

pub(crate) const QUIZ_COLUMNS: &str = r#"
    q.id, q.title, q.description, q.quiz_pic, q.time_limit, q.pass,
    q.randomize_questions, q.is_deleted, q.is_bookmarked, q.severity,
    q.category_id, q.creator_id, q.created_at, q.updated_at
"#;

pub(crate) const LISTING_FROM: &str = r#"
    , c.name AS category_name,
    u.name AS creator_name,
    (SELECT COUNT(*) FROM questions qs WHERE qs.quiz_id = q.id AND qs.is_deleted = FALSE) AS question_count
    FROM quizzes q
    JOIN categories c ON c.id = q.category_id
    JOIN users u ON u.id = q.creator_id
"#;

/// Every optional filter is a `$n IS NULL OR ...` guard so that an absent
/// value places no constraint.
const FILTER_WHERE: &str = r#"
    WHERE q.is_deleted = FALSE
      AND ($1::BIGINT IS NULL OR q.creator_id = $1)
      AND ($2::severity IS NULL OR q.severity = $2)
      AND ($3::TIMESTAMPTZ IS NULL OR q.created_at >= $3)
      AND ($4::TIMESTAMPTZ IS NULL OR q.created_at <= $4)
      AND ($5::TEXT IS NULL
           OR STRPOS(LOWER(q.title), LOWER($5)) > 0
           OR STRPOS(LOWER(q.description), LOWER($5)) > 0)
      AND ($6::BIGINT IS NULL OR q.category_id = $6)
      AND ($7::BIGINT IS NULL OR q.time_limit <= $7)
      AND ($8::BIGINT IS NULL OR q.pass <= $8)
      AND ($9::BOOLEAN IS NULL OR q.randomize_questions = $9)
"#;

pub struct PgQuizRepository {
    pool: PgPool,
}

impl PgQuizRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizRepository for PgQuizRepository {
    async fn find_live_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let sql = format!("SELECT {QUIZ_COLUMNS} FROM quizzes q WHERE q.id = $1 AND q.is_deleted = FALSE");
        let quiz = sqlx::query_as::<_, Quiz>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(quiz)
    }

    async fn find_live_by_title(&self, title: &str) -> AppResult<Option<Quiz>> {
        let sql = format!(
            "SELECT {QUIZ_COLUMNS} FROM quizzes q WHERE q.title = $1 AND q.is_deleted = FALSE"
        );
        let quiz = sqlx::query_as::<_, Quiz>(&sql)
            .bind(title)
            .fetch_optional(&self.pool)
            .await?;
        Ok(quiz)
    }

    async fn find_listing(&self, id: i64) -> AppResult<Option<QuizListing>> {
        let sql = format!(
            "SELECT {QUIZ_COLUMNS} {LISTING_FROM} WHERE q.id = $1 AND q.is_deleted = FALSE"
        );
        let listing = sqlx::query_as::<_, QuizListing>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(listing)
    }

    async fn create(&self, creator_id: i64, draft: &QuizDraft) -> AppResult<Quiz> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            INSERT INTO quizzes
                (title, description, quiz_pic, time_limit, pass, randomize_questions,
                 severity, category_id, creator_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, description, quiz_pic, time_limit, pass,
                      randomize_questions, is_deleted, is_bookmarked, severity,
                      category_id, creator_id, created_at, updated_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.quiz_pic)
        .bind(draft.time_limit)
        .bind(draft.pass)
        .bind(draft.randomize_questions)
        .bind(draft.severity)
        .bind(draft.category_id)
        .bind(creator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create quiz: {:?}", e);
            e
        })?;

        Ok(quiz)
    }

    async fn update(&self, id: i64, draft: &QuizDraft) -> AppResult<Option<Quiz>> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            UPDATE quizzes SET
                title = $1,
                description = $2,
                quiz_pic = $3,
                time_limit = $4,
                pass = $5,
                randomize_questions = $6,
                severity = $7,
                category_id = $8,
                updated_at = NOW()
            WHERE id = $9 AND is_deleted = FALSE
            RETURNING id, title, description, quiz_pic, time_limit, pass,
                      randomize_questions, is_deleted, is_bookmarked, severity,
                      category_id, creator_id, created_at, updated_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.quiz_pic)
        .bind(draft.time_limit)
        .bind(draft.pass)
        .bind(draft.randomize_questions)
        .bind(draft.severity)
        .bind(draft.category_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update quiz {}: {:?}", id, e);
            e
        })?;

        Ok(quiz)
    }

    async fn soft_delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE quizzes SET is_deleted = TRUE, updated_at = NOW() WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn filter(&self, filter: &QuizFilter) -> AppResult<(Vec<QuizListing>, i64)> {
        let order_by = order_by_clause(&filter.sort);
        let select_sql =
            format!("SELECT {QUIZ_COLUMNS} {LISTING_FROM} {FILTER_WHERE} {order_by} LIMIT $10 OFFSET $11");
        let count_sql = format!("SELECT COUNT(*) FROM quizzes q {FILTER_WHERE}");

        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(filter.creator_id)
            .bind(filter.severity)
            .bind(filter.created_from)
            .bind(filter.created_to)
            .bind(filter.query.as_deref())
            .bind(filter.category_id)
            .bind(filter.max_time_limit)
            .bind(filter.max_pass)
            .bind(filter.randomize_questions)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count filtered quizzes: {:?}", e);
                e
            })?;

        let items = sqlx::query_as::<_, QuizListing>(&select_sql)
            .bind(filter.creator_id)
            .bind(filter.severity)
            .bind(filter.created_from)
            .bind(filter.created_to)
            .bind(filter.query.as_deref())
            .bind(filter.category_id)
            .bind(filter.max_time_limit)
            .bind(filter.max_pass)
            .bind(filter.randomize_questions)
            .bind(filter.size)
            .bind(filter.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to filter quizzes: {:?}", e);
                e
            })?;

        Ok((items, total))
    }

    async fn count_live_by_creator(&self, creator_id: i64) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM quizzes WHERE creator_id = $1 AND is_deleted = FALSE",
        )
        .bind(creator_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
