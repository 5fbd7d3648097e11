// src/services/bookmark_service.rs

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{
        bookmark::BookmarkToggleResponse,
        page::{PageRequest, PageResponse},
        quiz::QuizResponse,
    },
    repositories::{BookmarkRepository, QuizRepository, ResultRepository},
    services::{Requester, quiz_service::enrich},
};

#[derive(Clone)]
pub struct BookmarkService {
    quizzes: Arc<dyn QuizRepository>,
    bookmarks: Arc<dyn BookmarkRepository>,
    results: Arc<dyn ResultRepository>,
}

impl BookmarkService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        bookmarks: Arc<dyn BookmarkRepository>,
        results: Arc<dyn ResultRepository>,
    ) -> Self {
        Self {
            quizzes,
            bookmarks,
            results,
        }
    }

    /// Bookmarks the quiz, or removes the bookmark if one exists.
    pub async fn toggle(&self, requester: &Requester, quiz_id: i64) -> AppResult<BookmarkToggleResponse> {
        self.quizzes
            .find_live_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz not found with the id {quiz_id}")))?;

        let is_bookmarked = self.bookmarks.toggle(requester.user_id, quiz_id).await?;

        Ok(BookmarkToggleResponse {
            quiz_id,
            is_bookmarked,
        })
    }

    /// Live quizzes the requester has bookmarked.
    pub async fn list(&self, requester: &Requester, page: PageRequest) -> AppResult<PageResponse<QuizResponse>> {
        let (listings, total) = self.bookmarks.list_quizzes(requester.user_id, page).await?;
        let content = enrich(
            self.results.as_ref(),
            self.bookmarks.as_ref(),
            listings,
            Some(requester.user_id),
        )
        .await?;

        Ok(PageResponse::new(content, page.page, page.size, total))
    }
}
