// src/handlers/result.rs

use axum::{
    Extension, Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::{page::PageParams, result::ResultRequest},
    services::{Requester, ResultService},
    utils::jwt::Claims,
};

/// Records a finished (or abandoned) attempt for the signed-in user.
pub async fn record_result(
    State(results): State<ResultService>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<ResultRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let requester = Requester::try_from(&claims)?;
    let result = results.record(&requester, payload).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

pub async fn list_my_results(
    State(results): State<ResultService>,
    Extension(claims): Extension<Claims>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let requester = Requester::try_from(&claims)?;

    Ok(Json(results.list_mine(&requester, params.into()).await?))
}
