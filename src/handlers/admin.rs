// src/handlers/admin.rs

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
    models::{page::PageParams, user::SignupRequest},
    services::{Requester, UserService},
    utils::jwt::Claims,
};

/// Lists all users, newest first.
/// Admin only.
pub async fn list_users(
    State(users): State<UserService>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    Ok(Json(users.list(params.into()).await?))
}

/// Creates an approved account of any role.
/// Admin only.
pub async fn create_user(
    State(users): State<UserService>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let admin = Requester::try_from(&claims)?;
    let user = users.create(&admin, payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Live category and user totals.
pub async fn dashboard(State(users): State<UserService>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(users.admin_dashboard().await?))
}

/// Approves a pending educator.
/// Admin only.
pub async fn approve_user(
    State(users): State<UserService>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    Ok(Json(users.approve(id).await?))
}

/// Blocks (soft-deletes) a user. Admins cannot block themselves.
pub async fn block_user(
    State(users): State<UserService>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let admin = Requester::try_from(&claims)?;

    Ok(Json(users.block(&admin, id).await?))
}

pub async fn unblock_user(
    State(users): State<UserService>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let admin = Requester::try_from(&claims)?;

    Ok(Json(users.unblock(&admin, id).await?))
}
