// src/handlers/auth.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::user::{LoginRequest, SignupRequest},
    services::AuthService,
};

/// Registers a new Student or Educator.
///
/// Returns 201 Created and the user object (excluding password).
pub async fn register(
    State(auth): State<AuthService>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let user = auth.register(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticates by email and password and returns a bearer token.
pub async fn login(
    State(auth): State<AuthService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let response = auth.login(payload).await?;

    Ok(Json(response))
}
