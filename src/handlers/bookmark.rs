// src/handlers/bookmark.rs

use axum::{
    Extension, Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::page::PageParams,
    services::{BookmarkService, Requester},
    utils::jwt::Claims,
};

/// Quizzes the signed-in user has bookmarked, most recent first.
pub async fn list_bookmarks(
    State(bookmarks): State<BookmarkService>,
    Extension(claims): Extension<Claims>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let requester = Requester::try_from(&claims)?;

    Ok(Json(bookmarks.list(&requester, params.into()).await?))
}
