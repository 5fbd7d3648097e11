// src/handlers/category.rs

use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::category::CategoryRequest,
    services::{CategoryService, Requester},
    utils::jwt::Claims,
};

pub async fn list_categories(
    State(categories): State<CategoryService>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(categories.list().await?))
}

pub async fn get_category(
    State(categories): State<CategoryService>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    Ok(Json(categories.get(id).await?))
}

/// Creates a category. Educator or Admin only.
pub async fn create_category(
    State(categories): State<CategoryService>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let requester = Requester::try_from(&claims)?;
    let category = categories.create(&requester, payload).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Overwrites a category. Educator or Admin only.
pub async fn update_category(
    State(categories): State<CategoryService>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let requester = Requester::try_from(&claims)?;

    Ok(Json(categories.update(&requester, id, payload).await?))
}

/// Soft-deletes a category. Educator or Admin only.
pub async fn delete_category(
    State(categories): State<CategoryService>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let requester = Requester::try_from(&claims)?;
    categories.delete(&requester, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
