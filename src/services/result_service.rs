// src/services/result_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        page::{PageRequest, PageResponse},
        result::{NewResult, QuizResult, ResultRequest},
    },
    repositories::{QuizRepository, ResultRepository},
    services::Requester,
};

#[derive(Clone)]
pub struct ResultService {
    quizzes: Arc<dyn QuizRepository>,
    results: Arc<dyn ResultRepository>,
}

impl ResultService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, results: Arc<dyn ResultRepository>) -> Self {
        Self { quizzes, results }
    }

    /// Records one attempt. Pass/fail is decided against the quiz's pass percentage.
    pub async fn record(&self, requester: &Requester, request: ResultRequest) -> AppResult<QuizResult> {
        request.validate()?;

        if request.score > request.total_score {
            return Err(AppError::BadRequest(
                "Score cannot exceed the total score".to_string(),
            ));
        }
        if request.correct_answers + request.incorrect_answers > request.total_question {
            return Err(AppError::BadRequest(
                "Answered questions cannot exceed the total question count".to_string(),
            ));
        }

        let quiz = self
            .quizzes
            .find_live_by_id(request.quiz_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Quiz not found with the id {}", request.quiz_id))
            })?;

        let result = self
            .results
            .create(&NewResult {
                user_id: requester.user_id,
                quiz_id: quiz.id,
                score: request.score,
                total_score: request.total_score,
                correct_answers: request.correct_answers,
                incorrect_answers: request.incorrect_answers,
                total_question: request.total_question,
                time_spent: request.time_spent,
                is_completed: request.is_completed,
                pass: is_pass(request.score, request.total_score, quiz.pass),
            })
            .await?;

        tracing::info!("Result {} recorded for quiz {} by user {}", result.id, quiz.id, requester.user_id);
        Ok(result)
    }

    /// The requester's own attempts, newest first.
    pub async fn list_mine(&self, requester: &Requester, page: PageRequest) -> AppResult<PageResponse<QuizResult>> {
        let (items, total) = self.results.list_by_user(requester.user_id, page).await?;
        Ok(PageResponse::new(items, page.page, page.size, total))
    }
}

/// `score / total_score` reaches `pass_percentage`, compared without division.
/// Widened to `i128` so the products cannot overflow.
fn is_pass(score: i64, total_score: i64, pass_percentage: i64) -> bool {
    i128::from(score) * 100 >= i128::from(pass_percentage) * i128::from(total_score)
}
