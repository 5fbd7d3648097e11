// src/services/mod.rs

pub mod auth_service;
pub mod bookmark_service;
pub mod category_service;
pub mod question_service;
pub mod quiz_service;
pub mod result_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use bookmark_service::BookmarkService;
pub use category_service::CategoryService;
pub use question_service::QuestionService;
pub use quiz_service::QuizService;
pub use result_service::ResultService;
pub use user_service::UserService;

use crate::{error::AppError, models::user::Role, utils::jwt::Claims};

/// The authenticated user behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub user_id: i64,
    pub role: Role,
}

impl TryFrom<&Claims> for Requester {
    type Error = AppError;

    fn try_from(claims: &Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: claims.user_id()?,
            role: claims.role,
        })
    }
}
