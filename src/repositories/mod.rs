// src/repositories/mod.rs

pub mod bookmark_repository;
pub mod category_repository;
pub mod question_repository;
pub mod quiz_repository;
pub mod result_repository;
pub mod user_repository;

pub use bookmark_repository::{BookmarkRepository, PgBookmarkRepository};
pub use category_repository::{CategoryRepository, PgCategoryRepository};
pub use question_repository::{PgQuestionRepository, QuestionRepository};
pub use quiz_repository::{PgQuizRepository, QuizRepository};
pub use result_repository::{PgResultRepository, ResultRepository};
pub use user_repository::{PgUserRepository, UserRepository};
