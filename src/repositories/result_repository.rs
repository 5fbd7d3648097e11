// src/repositories/result_repository.rs

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{
        page::PageRequest,
        result::{NewResult, QuizResult},
    },
};

#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn create(&self, result: &NewResult) -> AppResult<QuizResult>;
    /// Number of recorded attempts per quiz id. Quizzes without attempts are absent.
    async fn count_by_quiz_ids(&self, quiz_ids: &[i64]) -> AppResult<HashMap<i64, i64>>;
    /// A user's results, newest first.
    async fn list_by_user(&self, user_id: i64, page: PageRequest) -> AppResult<(Vec<QuizResult>, i64)>;
}

const RESULT_COLUMNS: &str = r#"
    id, user_id, quiz_id, score, total_score, correct_answers, incorrect_answers,
    total_question, time_spent, is_completed, pass, created_at
"#;

pub struct PgResultRepository {
    pool: PgPool,
}

impl PgResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultRepository for PgResultRepository {
    async fn create(&self, result: &NewResult) -> AppResult<QuizResult> {
        let sql = format!(
            r#"
            INSERT INTO results
                (user_id, quiz_id, score, total_score, correct_answers, incorrect_answers,
                 total_question, time_spent, is_completed, pass)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {RESULT_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, QuizResult>(&sql)
            .bind(result.user_id)
            .bind(result.quiz_id)
            .bind(result.score)
            .bind(result.total_score)
            .bind(result.correct_answers)
            .bind(result.incorrect_answers)
            .bind(result.total_question)
            .bind(result.time_spent)
            .bind(result.is_completed)
            .bind(result.pass)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to record result: {:?}", e);
                e
            })?;

        Ok(created)
    }

    async fn count_by_quiz_ids(&self, quiz_ids: &[i64]) -> AppResult<HashMap<i64, i64>> {
        if quiz_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64)> = sqlx::query_as(
            "SELECT quiz_id, COUNT(*) FROM results WHERE quiz_id = ANY($1) GROUP BY quiz_id",
        )
        .bind(quiz_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }

    async fn list_by_user(&self, user_id: i64, page: PageRequest) -> AppResult<(Vec<QuizResult>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM results WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            "SELECT {RESULT_COLUMNS} FROM results WHERE user_id = $1 ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
        );
        let results = sqlx::query_as::<_, QuizResult>(&sql)
            .bind(user_id)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((results, total))
    }
}
