// src/models/result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'results' table in the database.
/// One row per quiz attempt.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    pub score: i64,
    pub total_score: i64,
    pub correct_answers: i64,
    pub incorrect_answers: i64,
    pub total_question: i64,
    /// Seconds.
    pub time_spent: i64,
    pub is_completed: bool,
    pub pass: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Column values for a new result row.
#[derive(Debug, Clone)]
pub struct NewResult {
    pub user_id: i64,
    pub quiz_id: i64,
    pub score: i64,
    pub total_score: i64,
    pub correct_answers: i64,
    pub incorrect_answers: i64,
    pub total_question: i64,
    pub time_spent: i64,
    pub is_completed: bool,
    pub pass: bool,
}

/// DTO for submitting an attempt outcome.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResultRequest {
    #[serde(alias = "quizId")]
    pub quiz_id: i64,
    #[validate(range(min = 0, max = 1_000_000))]
    pub score: i64,
    #[serde(alias = "totalScore")]
    #[validate(range(min = 1, max = 1_000_000))]
    pub total_score: i64,
    #[serde(alias = "correctAnswers")]
    #[validate(range(min = 0, max = 1_000_000))]
    pub correct_answers: i64,
    #[serde(alias = "incorrectAnswers")]
    #[validate(range(min = 0, max = 1_000_000))]
    pub incorrect_answers: i64,
    #[serde(alias = "totalQuestion")]
    #[validate(range(min = 0, max = 1_000_000))]
    pub total_question: i64,
    #[serde(alias = "timeSpent")]
    #[validate(range(min = 0))]
    pub time_spent: i64,
    #[serde(default = "default_completed", alias = "isCompleted")]
    pub is_completed: bool,
}

fn default_completed() -> bool {
    true
}
