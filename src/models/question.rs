// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Number of options a question carries, stored as the Postgres enum `question_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "question_type")]
pub enum QuestionType {
    Two,
    Four,
}

impl QuestionType {
    pub fn option_count(&self) -> usize {
        match self {
            QuestionType::Two => 2,
            QuestionType::Four => 4,
        }
    }
}

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub question_pic: Option<String>,
    pub max_score: i64,
    pub randomize_options: bool,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Represents the 'options' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
    pub option_pic: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for one option inside a question payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OptionRequest {
    #[validate(length(min = 1, max = 500))]
    pub text: String,
    #[serde(alias = "isCorrect")]
    pub is_correct: bool,
    #[serde(default, alias = "optionPic")]
    pub option_pic: Option<String>,
}

/// DTO for creating a question together with its options.
/// On update the options replace the existing ones.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub text: String,
    #[serde(alias = "questionType")]
    pub question_type: QuestionType,
    #[serde(default, alias = "questionPic")]
    pub question_pic: Option<String>,
    #[serde(alias = "maxScore")]
    #[validate(range(min = 1, max = 100))]
    pub max_score: i64,
    #[serde(default, alias = "randomizeOptions")]
    pub randomize_options: Option<bool>,
    #[validate(nested)]
    pub options: Vec<OptionRequest>,
}

/// Option as sent to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionResponse {
    pub id: i64,
    pub text: String,
    pub is_correct: bool,
    pub option_pic: Option<String>,
}

impl From<QuestionOption> for OptionResponse {
    fn from(option: QuestionOption) -> Self {
        Self {
            id: option.id,
            text: option.text,
            is_correct: option.is_correct,
            option_pic: option.option_pic,
        }
    }
}

/// Question with its live options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub question_pic: Option<String>,
    pub max_score: i64,
    pub randomize_options: bool,
    pub options: Vec<OptionResponse>,
}

impl QuestionResponse {
    pub fn new(question: Question, options: Vec<QuestionOption>) -> Self {
        Self {
            id: question.id,
            quiz_id: question.quiz_id,
            text: question.text,
            question_type: question.question_type,
            question_pic: question.question_pic,
            max_score: question.max_score,
            randomize_options: question.randomize_options,
            options: options
                .into_iter()
                .filter(|o| !o.is_deleted)
                .map(OptionResponse::from)
                .collect(),
        }
    }
}
