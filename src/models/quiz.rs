// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::{
    category::CategorySummary,
    page::empty_as_none,
    question::QuestionResponse,
    user::CreatorSummary,
};

/// Quiz difficulty, stored as the Postgres enum `severity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "severity")]
pub enum Severity {
    Beginner,
    Medium,
    Hard,
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Severity::Beginner),
            "medium" => Ok(Severity::Medium),
            "hard" => Ok(Severity::Hard),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,

    /// Unique among non-deleted quizzes.
    pub title: String,

    pub description: String,

    /// Picture reference (URL or data URL).
    pub quiz_pic: Option<String>,

    /// Stored in seconds.
    pub time_limit: i64,

    /// Pass threshold in percent.
    pub pass: i64,

    pub randomize_questions: bool,
    pub is_deleted: bool,
    pub is_bookmarked: bool,
    pub severity: Severity,
    pub category_id: i64,
    pub creator_id: i64,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A quiz row joined with its category and creator names.
/// Produced by the filter query.
#[derive(Debug, Clone, FromRow)]
pub struct QuizListing {
    #[sqlx(flatten)]
    pub quiz: Quiz,
    pub category_name: String,
    pub creator_name: String,
    pub question_count: i64,
}

/// Column values written on create and update.
/// `time_limit` is already converted to seconds.
#[derive(Debug, Clone)]
pub struct QuizDraft {
    pub title: String,
    pub description: String,
    pub quiz_pic: Option<String>,
    pub time_limit: i64,
    pub pass: i64,
    pub randomize_questions: bool,
    pub severity: Severity,
    pub category_id: i64,
}

/// DTO for creating or updating a quiz.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Title should have between 3 and 100 characters."
    ))]
    pub title: String,

    #[validate(length(
        min = 10,
        max = 255,
        message = "Description should have between 10 and 255 characters."
    ))]
    pub description: String,

    #[serde(default, alias = "quizPic")]
    #[validate(custom(function = crate::utils::html::validate_picture))]
    pub quiz_pic: Option<String>,

    /// Minutes.
    #[serde(alias = "timeLimit")]
    #[validate(range(min = 1, message = "Time limit should be greater than 0."))]
    pub time_limit: i64,

    #[validate(range(
        min = 10,
        max = 100,
        message = "Passing percentage should be between 10 and 100."
    ))]
    pub pass: i64,

    #[serde(default, alias = "randomizeQuestions")]
    pub randomize_questions: Option<bool>,

    #[serde(default, alias = "categoryId")]
    pub category_id: Option<i64>,

    pub severity: Severity,
}

/// Query parameters accepted by the filter endpoints.
/// Empty values (`creatorId=`) are treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizFilterParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub toggle: Option<bool>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub severity: Option<Severity>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub end: Option<String>,
    /// Minutes.
    #[serde(default, alias = "timeLimit", deserialize_with = "empty_as_none")]
    pub time_limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pass: Option<i64>,
    #[serde(default, alias = "randomizeQuestions", deserialize_with = "empty_as_none")]
    pub randomize_questions: Option<bool>,
    #[serde(default, alias = "categoryId", deserialize_with = "empty_as_none")]
    pub category_id: Option<i64>,
    #[serde(default, alias = "creatorId", deserialize_with = "empty_as_none")]
    pub creator_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sort: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub size: Option<i64>,
}

/// Sortable quiz columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizSortField {
    Id,
    Title,
    Description,
    TimeLimit,
    Pass,
    Severity,
    CreatedAt,
    UpdatedAt,
}

impl QuizSortField {
    pub fn column(&self) -> &'static str {
        match self {
            QuizSortField::Id => "q.id",
            QuizSortField::Title => "q.title",
            QuizSortField::Description => "q.description",
            QuizSortField::TimeLimit => "q.time_limit",
            QuizSortField::Pass => "q.pass",
            QuizSortField::Severity => "q.severity",
            QuizSortField::CreatedAt => "q.created_at",
            QuizSortField::UpdatedAt => "q.updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One `field:direction` term of a sort expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: QuizSortField,
    pub direction: SortDirection,
}

/// Resolved filter handed to the repository.
/// Every `None` means "no constraint"; `max_time_limit` is in seconds.
#[derive(Debug, Clone, Default)]
pub struct QuizFilter {
    pub creator_id: Option<i64>,
    pub severity: Option<Severity>,
    pub created_from: Option<chrono::DateTime<chrono::Utc>>,
    pub created_to: Option<chrono::DateTime<chrono::Utc>>,
    pub query: Option<String>,
    pub category_id: Option<i64>,
    pub max_time_limit: Option<i64>,
    pub max_pass: Option<i64>,
    pub randomize_questions: Option<bool>,
    pub sort: Vec<SortOrder>,
    pub page: i64,
    pub size: i64,
}

impl QuizFilter {
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

/// Quiz as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub quiz_pic: Option<String>,
    /// Seconds.
    pub time_limit: i64,
    pub pass: i64,
    pub randomize_questions: bool,
    pub severity: Severity,
    pub category: CategorySummary,
    pub creator: CreatorSummary,
    pub question_count: i64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub attempted_user_count: i64,
    pub is_bookmarked: bool,
}

impl QuizResponse {
    pub fn from_listing(listing: QuizListing, attempted_user_count: i64, is_bookmarked: bool) -> Self {
        let QuizListing {
            quiz,
            category_name,
            creator_name,
            question_count,
        } = listing;

        Self {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            quiz_pic: quiz.quiz_pic,
            time_limit: quiz.time_limit,
            pass: quiz.pass,
            randomize_questions: quiz.randomize_questions,
            severity: quiz.severity,
            category: CategorySummary {
                id: quiz.category_id,
                name: category_name,
            },
            creator: CreatorSummary {
                id: quiz.creator_id,
                name: creator_name,
            },
            question_count,
            created_at: quiz.created_at,
            attempted_user_count,
            is_bookmarked,
        }
    }
}

/// Single quiz with its live questions and options.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizDetailResponse {
    #[serde(flatten)]
    pub quiz: QuizResponse,
    pub questions: Vec<QuestionResponse>,
}
