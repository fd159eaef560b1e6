use super::service::CatalogService;
use super::types::{ErrorBody, NewJoke, NewUser, SearchResponse, UpdateResponse, UserResponse};
use crate::error::CatalogError;

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Count of records returned when the caller omits `limit`.
const DEFAULT_LIMIT: &str = "10";

#[derive(Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateJokeRequest {
    pub body: String,
}

/// Builds the HTTP adapter over a shared catalog service. Path-to-operation
/// mapping and status-code translation live here and nowhere else.
pub fn router(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/jokes", post(handle_add_joke))
        .route("/jokes/funniest", get(handle_funniest))
        .route("/jokes/random", get(handle_random))
        .route("/jokes/search/:text", get(handle_search))
        .route("/jokes/:id", get(handle_joke_by_id).put(handle_update_body))
        .route("/users", post(handle_register_user))
        .route("/stats/month/:month", get(handle_jokes_by_month))
        .route("/stats/top-month/:year", get(handle_month_and_count))
        .route("/users/without-jokes", get(handle_users_without_jokes))
        .layer(Extension(service))
}

fn error_response(err: CatalogError) -> Response {
    let (status, code) = match &err {
        CatalogError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        CatalogError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
        CatalogError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_err"),
        CatalogError::Unimplemented(_) => (StatusCode::NOT_IMPLEMENTED, "unimplemented"),
        CatalogError::StoreUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable"),
    };

    if status == StatusCode::SERVICE_UNAVAILABLE {
        tracing::error!("store fault: {}", err);
    } else {
        tracing::debug!("request failed: {}", err);
    }

    (
        status,
        Json(ErrorBody {
            code: code.to_string(),
            description: err.to_string(),
        }),
    )
        .into_response()
}

pub async fn handle_joke_by_id(
    Extension(service): Extension<Arc<CatalogService>>,
    Path(id): Path<String>,
) -> Response {
    match service.joke_by_id(&id).await {
        Ok(joke) => (StatusCode::OK, Json(joke)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_funniest(
    Extension(service): Extension<Arc<CatalogService>>,
    Query(params): Query<LimitParams>,
) -> Response {
    let limit = params.limit.as_deref().unwrap_or(DEFAULT_LIMIT);
    match service.funniest(limit).await {
        Ok(jokes) => (StatusCode::OK, Json(jokes)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_random(
    Extension(service): Extension<Arc<CatalogService>>,
    Query(params): Query<LimitParams>,
) -> Response {
    let limit = params.limit.as_deref().unwrap_or(DEFAULT_LIMIT);
    match service.random(limit).await {
        Ok(jokes) => (StatusCode::OK, Json(jokes)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_search(
    Extension(service): Extension<Arc<CatalogService>>,
    Path(text): Path<String>,
) -> Response {
    match service.search(&text).await {
        Ok(results) => (
            StatusCode::OK,
            Json(SearchResponse {
                query: text,
                count: results.len(),
                results,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_add_joke(
    Extension(service): Extension<Arc<CatalogService>>,
    Json(req): Json<NewJoke>,
) -> Response {
    match service.add(req).await {
        Ok(joke) => {
            tracing::debug!(id = %joke.id, "stored new joke");
            (StatusCode::CREATED, Json(joke)).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn handle_update_body(
    Extension(service): Extension<Arc<CatalogService>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateJokeRequest>,
) -> Response {
    match service.update_body(&req.body, &id).await {
        Ok(()) => (StatusCode::OK, Json(UpdateResponse { id, updated: true })).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_register_user(
    Extension(service): Extension<Arc<CatalogService>>,
    Json(req): Json<NewUser>,
) -> Response {
    match service.register_user(req).await {
        Ok(user) => (StatusCode::CREATED, Json(UserResponse::from(user))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_jokes_by_month(
    Extension(service): Extension<Arc<CatalogService>>,
    Path(month): Path<u32>,
) -> Response {
    match service.jokes_by_month(month).await {
        Ok(count) => (StatusCode::OK, Json(count)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_month_and_count(
    Extension(service): Extension<Arc<CatalogService>>,
    Path(year): Path<i32>,
) -> Response {
    match service.month_and_count(year).await {
        Ok(top) => (StatusCode::OK, Json(top)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_users_without_jokes(
    Extension(service): Extension<Arc<CatalogService>>,
) -> Response {
    match service.users_without_jokes().await {
        Ok(usernames) => (StatusCode::OK, Json(usernames)).into_response(),
        Err(e) => error_response(e),
    }
}
