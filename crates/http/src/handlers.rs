#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{OriginalUri, Path, Query, State};
use weather_insights_core::{WeatherObservation, WeatherSummary, validate_city};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::HistoryParams;
use crate::response_types::PaginatedResponse;

fn request_path(uri: &OriginalUri) -> String {
    uri.0.path_and_query().map_or_else(|| uri.0.path().to_owned(), ToString::to_string)
}

fn city_param(path: Result<Path<String>, PathRejection>, req: &str) -> Result<String, ApiError> {
    let Path(city) = path.map_err(|e| ApiError::bad_request(e.body_text(), req))?;
    validate_city(&city).map_err(|e| ApiError::from_validation(&e, req))?;
    Ok(city)
}

pub async fn current_weather(
    State(state): State<Arc<AppState>>,
    uri: OriginalUri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<WeatherObservation>, ApiError> {
    let req = request_path(&uri);
    let city = city_param(path, &req)?;
    let observation = state
        .weather
        .get_current_weather(&city)
        .await
        .map_err(|e| ApiError::from_service(e, req))?;
    Ok(Json(observation))
}

pub async fn weekly_summary(
    State(state): State<Arc<AppState>>,
    uri: OriginalUri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<WeatherSummary>, ApiError> {
    let req = request_path(&uri);
    let city = city_param(path, &req)?;
    let summary = state
        .weather
        .get_weekly_summary(&city)
        .await
        .map_err(|e| ApiError::from_service(e, req))?;
    Ok(Json(summary))
}

pub async fn history(
    State(state): State<Arc<AppState>>,
    uri: OriginalUri,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<PaginatedResponse>, ApiError> {
    let req = request_path(&uri);
    let city = city_param(path, &req)?;
    let Query(params) = query.map_err(|e| ApiError::bad_request(e.body_text(), req.as_str()))?;
    let pagination = params.pagination().map_err(|e| ApiError::from_validation(&e, req.as_str()))?;

    let page = state
        .weather
        .get_history(&city, pagination)
        .await
        .map_err(|e| ApiError::from_service(e, req))?;
    Ok(Json(page.into()))
}
