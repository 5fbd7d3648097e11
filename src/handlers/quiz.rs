// src/handlers/quiz.rs

use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::{question::QuestionRequest, quiz::{QuizFilterParams, QuizRequest}},
    services::{BookmarkService, QuestionService, QuizService, Requester},
    utils::jwt::Claims,
};

/// Filters quizzes for the signed-in user.
///
/// Educators only see their own quizzes unless `toggle=true`.
pub async fn filter_quizzes(
    State(quizzes): State<QuizService>,
    Extension(claims): Extension<Claims>,
    params: Result<Query<QuizFilterParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let requester = Requester::try_from(&claims)?;
    let page = quizzes.filter(Some(&requester), params).await?;

    Ok(Json(page))
}

/// Filters quizzes without a session. Nothing is reported as bookmarked.
pub async fn filter_public_quizzes(
    State(quizzes): State<QuizService>,
    params: Result<Query<QuizFilterParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let page = quizzes.filter(None, params).await?;

    Ok(Json(page))
}

pub async fn get_quiz(
    State(quizzes): State<QuizService>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let requester = Requester::try_from(&claims)?;

    Ok(Json(quizzes.get(&requester, id).await?))
}

/// Creates a quiz. Educator or Admin only.
pub async fn create_quiz(
    State(quizzes): State<QuizService>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let requester = Requester::try_from(&claims)?;
    let quiz = quizzes.create(&requester, payload).await?;

    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Overwrites a quiz. Educator or Admin only.
pub async fn update_quiz(
    State(quizzes): State<QuizService>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let requester = Requester::try_from(&claims)?;

    Ok(Json(quizzes.update(&requester, id, payload).await?))
}

/// Soft-deletes a quiz. Educator or Admin only.
pub async fn delete_quiz(
    State(quizzes): State<QuizService>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let requester = Requester::try_from(&claims)?;
    quizzes.delete(&requester, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Adds a question with its options to a quiz. Educator or Admin only.
pub async fn create_question(
    State(questions): State<QuestionService>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(quiz_id) = id?;
    let Json(payload) = payload?;
    let question = questions.create(quiz_id, payload).await?;

    Ok((StatusCode::CREATED, Json(question)))
}

/// Rewrites a question and replaces its options. Educator or Admin only.
pub async fn update_question(
    State(questions): State<QuestionService>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((quiz_id, question_id)) = ids?;
    let Json(payload) = payload?;

    Ok(Json(questions.update(quiz_id, question_id, payload).await?))
}

/// Soft-deletes a question. Educator or Admin only.
pub async fn delete_question(
    State(questions): State<QuestionService>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((quiz_id, question_id)) = ids?;
    questions.delete(quiz_id, question_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_questions(
    State(questions): State<QuestionService>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(quiz_id) = id?;

    Ok(Json(questions.list(quiz_id).await?))
}

pub async fn toggle_bookmark(
    State(bookmarks): State<BookmarkService>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(quiz_id) = id?;
    let requester = Requester::try_from(&claims)?;

    Ok(Json(bookmarks.toggle(&requester, quiz_id).await?))
}
