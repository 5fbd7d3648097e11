// src/services/question_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::question::{QuestionRequest, QuestionResponse},
    repositories::{QuestionRepository, QuizRepository},
};

#[derive(Clone)]
pub struct QuestionService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, questions: Arc<dyn QuestionRepository>) -> Self {
        Self { quizzes, questions }
    }

    /// Adds a question to a live quiz.
    ///
    /// The option count must match the question type and at least one option
    /// must be correct.
    pub async fn create(&self, quiz_id: i64, request: QuestionRequest) -> AppResult<QuestionResponse> {
        check_options(&request)?;
        self.ensure_quiz(quiz_id).await?;

        let (question, options) = self.questions.create_with_options(quiz_id, &request).await?;
        tracing::info!("Question {} added to quiz {}", question.id, quiz_id);

        Ok(QuestionResponse::new(question, options))
    }

    pub async fn list(&self, quiz_id: i64) -> AppResult<Vec<QuestionResponse>> {
        self.ensure_quiz(quiz_id).await?;

        Ok(self
            .questions
            .list_by_quiz(quiz_id)
            .await?
            .into_iter()
            .map(|(question, options)| QuestionResponse::new(question, options))
            .collect())
    }

    /// Rewrites a question and swaps in the supplied options.
    pub async fn update(
        &self,
        quiz_id: i64,
        id: i64,
        request: QuestionRequest,
    ) -> AppResult<QuestionResponse> {
        check_options(&request)?;
        self.ensure_quiz(quiz_id).await?;

        let (question, options) = self
            .questions
            .update_with_options(quiz_id, id, &request)
            .await?
            .ok_or_else(|| question_not_found(id))?;
        tracing::info!("Question {} of quiz {} updated", id, quiz_id);

        Ok(QuestionResponse::new(question, options))
    }

    /// Soft-deletes a question of a live quiz. Returns its id.
    pub async fn delete(&self, quiz_id: i64, id: i64) -> AppResult<i64> {
        self.ensure_quiz(quiz_id).await?;

        if !self.questions.soft_delete(quiz_id, id).await? {
            return Err(question_not_found(id));
        }
        tracing::info!("Question {} of quiz {} deleted", id, quiz_id);

        Ok(id)
    }

    async fn ensure_quiz(&self, quiz_id: i64) -> AppResult<()> {
        self.quizzes
            .find_live_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz not found with the id {quiz_id}")))?;
        Ok(())
    }
}

fn check_options(request: &QuestionRequest) -> AppResult<()> {
    request.validate()?;

    let expected = request.question_type.option_count();
    if request.options.len() != expected {
        return Err(AppError::BadRequest(format!(
            "This question type requires exactly {expected} options"
        )));
    }
    if !request.options.iter().any(|o| o.is_correct) {
        return Err(AppError::BadRequest(
            "At least one option must be marked correct".to_string(),
        ));
    }
    Ok(())
}

fn question_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Question not found with the id {id}"))
}
