// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::{
    config::Config,
    repositories::{
        BookmarkRepository, CategoryRepository, PgBookmarkRepository, PgCategoryRepository,
        PgQuestionRepository, PgQuizRepository, PgResultRepository, PgUserRepository,
        QuestionRepository, QuizRepository, ResultRepository, UserRepository,
    },
    services::{
        AuthService, BookmarkService, CategoryService, QuestionService, QuizService,
        ResultService, UserService,
    },
};

/// Shared application state.
/// Repositories sit behind trait objects so tests can swap in an in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: Arc<dyn UserRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub quizzes: Arc<dyn QuizRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub results: Arc<dyn ResultRepository>,
    pub bookmarks: Arc<dyn BookmarkRepository>,
}

impl AppState {
    /// Wires every repository to the same Postgres pool.
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self {
            config,
            users: Arc::new(PgUserRepository::new(pool.clone())),
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            quizzes: Arc::new(PgQuizRepository::new(pool.clone())),
            questions: Arc::new(PgQuestionRepository::new(pool.clone())),
            results: Arc::new(PgResultRepository::new(pool.clone())),
            bookmarks: Arc::new(PgBookmarkRepository::new(pool)),
        }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        AuthService::new(state.users.clone(), &state.config)
    }
}

impl FromRef<AppState> for QuizService {
    fn from_ref(state: &AppState) -> Self {
        QuizService::new(
            state.quizzes.clone(),
            state.categories.clone(),
            state.questions.clone(),
            state.results.clone(),
            state.bookmarks.clone(),
        )
    }
}

impl FromRef<AppState> for CategoryService {
    fn from_ref(state: &AppState) -> Self {
        CategoryService::new(state.categories.clone())
    }
}

impl FromRef<AppState> for QuestionService {
    fn from_ref(state: &AppState) -> Self {
        QuestionService::new(state.quizzes.clone(), state.questions.clone())
    }
}

impl FromRef<AppState> for ResultService {
    fn from_ref(state: &AppState) -> Self {
        ResultService::new(state.quizzes.clone(), state.results.clone())
    }
}

impl FromRef<AppState> for BookmarkService {
    fn from_ref(state: &AppState) -> Self {
        BookmarkService::new(
            state.quizzes.clone(),
            state.bookmarks.clone(),
            state.results.clone(),
        )
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(state: &AppState) -> Self {
        UserService::new(
            state.users.clone(),
            state.categories.clone(),
            state.quizzes.clone(),
            state.questions.clone(),
        )
    }
}
