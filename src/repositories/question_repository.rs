// src/repositories/question_repository.rs

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::{
    error::AppResult,
    models::question::{Question, QuestionOption, QuestionRequest},
};

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Inserts a question and its options atomically.
    async fn create_with_options(
        &self,
        quiz_id: i64,
        request: &QuestionRequest,
    ) -> AppResult<(Question, Vec<QuestionOption>)>;
    /// Live questions of a quiz with all of their options, in insertion order.
    async fn list_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<(Question, Vec<QuestionOption>)>>;
    /// Rewrites a live question of the given quiz and replaces its options.
    /// The previous options are soft-deleted. Returns `None` if nothing matched.
    async fn update_with_options(
        &self,
        quiz_id: i64,
        id: i64,
        request: &QuestionRequest,
    ) -> AppResult<Option<(Question, Vec<QuestionOption>)>>;
    /// Flips `is_deleted`; returns false if no live question of the quiz matched.
    async fn soft_delete(&self, quiz_id: i64, id: i64) -> AppResult<bool>;
    /// Live questions across the creator's live quizzes.
    async fn count_live_by_creator(&self, creator_id: i64) -> AppResult<i64>;
}

const QUESTION_COLUMNS: &str = r#"
    id, quiz_id, text, question_type, question_pic, max_score,
    randomize_options, is_deleted, created_at, updated_at
"#;

pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn create_with_options(
        &self,
        quiz_id: i64,
        request: &QuestionRequest,
    ) -> AppResult<(Question, Vec<QuestionOption>)> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO questions (quiz_id, text, question_type, question_pic, max_score, randomize_options)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {QUESTION_COLUMNS}
            "#
        );
        let question = sqlx::query_as::<_, Question>(&sql)
            .bind(quiz_id)
            .bind(&request.text)
            .bind(request.question_type)
            .bind(request.question_pic.as_deref())
            .bind(request.max_score)
            .bind(request.randomize_options.unwrap_or(false))
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create question: {:?}", e);
                e
            })?;

        let options = insert_options(&mut tx, question.id, request).await?;

        tx.commit().await?;

        Ok((question, options))
    }

    async fn list_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<(Question, Vec<QuestionOption>)>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE quiz_id = $1 AND is_deleted = FALSE ORDER BY id ASC"
        );
        let questions = sqlx::query_as::<_, Question>(&sql)
            .bind(quiz_id)
            .fetch_all(&self.pool)
            .await?;

        let question_ids: Vec<i64> = questions.iter().map(|q| q.id).collect();

        let options = sqlx::query_as::<_, QuestionOption>(
            r#"
            SELECT id, question_id, text, is_correct, option_pic, is_deleted, created_at, updated_at
            FROM options
            WHERE question_id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(&question_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_question: HashMap<i64, Vec<QuestionOption>> = HashMap::new();
        for option in options {
            by_question.entry(option.question_id).or_default().push(option);
        }

        Ok(questions
            .into_iter()
            .map(|q| {
                let opts = by_question.remove(&q.id).unwrap_or_default();
                (q, opts)
            })
            .collect())
    }

    async fn update_with_options(
        &self,
        quiz_id: i64,
        id: i64,
        request: &QuestionRequest,
    ) -> AppResult<Option<(Question, Vec<QuestionOption>)>> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            UPDATE questions SET
                text = $1,
                question_type = $2,
                question_pic = $3,
                max_score = $4,
                randomize_options = $5,
                updated_at = NOW()
            WHERE id = $6 AND quiz_id = $7 AND is_deleted = FALSE
            RETURNING {QUESTION_COLUMNS}
            "#
        );
        let question = sqlx::query_as::<_, Question>(&sql)
            .bind(&request.text)
            .bind(request.question_type)
            .bind(request.question_pic.as_deref())
            .bind(request.max_score)
            .bind(request.randomize_options.unwrap_or(false))
            .bind(id)
            .bind(quiz_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update question {}: {:?}", id, e);
                e
            })?;

        let Some(question) = question else {
            return Ok(None);
        };

        sqlx::query(
            "UPDATE options SET is_deleted = TRUE, updated_at = NOW() WHERE question_id = $1 AND is_deleted = FALSE",
        )
        .bind(question.id)
        .execute(&mut *tx)
        .await?;

        let options = insert_options(&mut tx, question.id, request).await?;

        tx.commit().await?;

        Ok(Some((question, options)))
    }

    async fn soft_delete(&self, quiz_id: i64, id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE questions SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND quiz_id = $2 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .bind(quiz_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_live_by_creator(&self, creator_id: i64) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM questions qs
            JOIN quizzes q ON q.id = qs.quiz_id
            WHERE q.creator_id = $1 AND q.is_deleted = FALSE AND qs.is_deleted = FALSE
            "#,
        )
        .bind(creator_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

async fn insert_options(
    tx: &mut Transaction<'_, Postgres>,
    question_id: i64,
    request: &QuestionRequest,
) -> AppResult<Vec<QuestionOption>> {
    let mut options = Vec::with_capacity(request.options.len());
    for option in &request.options {
        let created = sqlx::query_as::<_, QuestionOption>(
            r#"
            INSERT INTO options (question_id, text, is_correct, option_pic)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question_id, text, is_correct, option_pic, is_deleted, created_at, updated_at
            "#,
        )
        .bind(question_id)
        .bind(&option.text)
        .bind(option.is_correct)
        .bind(option.option_pic.as_deref())
        .fetch_one(&mut **tx)
        .await?;
        options.push(created);
    }

    Ok(options)
}
