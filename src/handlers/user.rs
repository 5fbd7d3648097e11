// src/handlers/user.rs

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::user::ProfileUpdateRequest,
    services::{Requester, UserService},
    utils::jwt::Claims,
};

/// Returns the signed-in user's own account.
pub async fn get_profile(
    State(users): State<UserService>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let requester = Requester::try_from(&claims)?;

    Ok(Json(users.profile(&requester).await?))
}

/// Updates name, picture, bio and education.
/// The password only changes when the payload carries one.
pub async fn update_profile(
    State(users): State<UserService>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<ProfileUpdateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let requester = Requester::try_from(&claims)?;

    Ok(Json(users.update_profile(&requester, payload).await?))
}

/// Quiz and question totals for the signed-in author.
pub async fn educator_dashboard(
    State(users): State<UserService>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let requester = Requester::try_from(&claims)?;

    Ok(Json(users.educator_dashboard(&requester).await?))
}
