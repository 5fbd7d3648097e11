// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Account role, stored as the Postgres enum `user_role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role")]
pub enum Role {
    Student,
    Educator,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Educator => "Educator",
            Role::Admin => "Admin",
        }
    }

    /// Roles allowed to author quizzes, questions and categories.
    pub fn can_author(&self) -> bool {
        matches!(self, Role::Educator | Role::Admin)
    }
}

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub name: String,

    /// Unique login email.
    pub email: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    pub role: Role,

    /// Educators need an admin approval before they can log in.
    pub is_approved: bool,

    /// Soft-delete flag; a deleted user is "blocked".
    pub is_deleted: bool,

    pub profile_pic: Option<String>,
    pub bio: Option<String>,
    pub education: Option<String>,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Fields needed to insert a user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub is_approved: bool,
    pub profile_pic: Option<String>,
    pub bio: Option<String>,
    pub education: Option<String>,
}

/// DTO for creating a new user (Registration).
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Name length must be between 3 and 100 characters."
    ))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address."))]
    pub email: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "Password length must be between 6 and 128 characters."
    ))]
    pub password: String,
    pub role: Role,
    #[serde(default, alias = "profilePic")]
    pub profile_pic: Option<String>,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub education: Option<String>,
}

/// DTO for editing the signed-in user's own profile.
/// The email is fixed; the password only changes when supplied.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileUpdateRequest {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Name length must be between 3 and 100 characters."
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(
        min = 6,
        max = 128,
        message = "Password length must be between 6 and 128 characters."
    ))]
    pub password: Option<String>,
    #[serde(default, alias = "profilePic")]
    #[validate(custom(function = crate::utils::html::validate_picture))]
    pub profile_pic: Option<String>,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub education: Option<String>,
}

/// Column values written by a profile update.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: String,
    pub password_hash: Option<String>,
    pub profile_pic: Option<String>,
    pub bio: Option<String>,
    pub education: Option<String>,
}

/// DTO for user login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255))]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Returned by a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub role: Role,
    pub is_approved: bool,
}

/// Compact creator info embedded in quiz responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorSummary {
    pub id: i64,
    pub name: String,
}

/// Counters shown on an educator's dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducatorDashboard {
    pub total_quiz: i64,
    pub total_question: i64,
}

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub total_category: i64,
    pub total_user: i64,
}
