//! HTTP routes.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use std::sync::Arc;

use catbridge_domain::{Breed, CatImage, ErrorBody, VoteQuery};

use crate::app::App;
use crate::use_cases::{cats::ImageRecord, UseCaseError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/cat-images", get(cat_images))
        .route("/api/cat-images/by-breed", get(cat_images_by_breed))
        .route("/api/breeds", get(breeds))
        .route("/api/favorites", get(list_favorites).post(add_favorite))
        .route("/api/favorites/{id}", delete(remove_favorite))
        .route("/api/votes", get(list_votes).post(cast_vote))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Images & Breeds
// =============================================================================

async fn cat_images(State(app): State<Arc<App>>) -> Result<Json<Vec<CatImage>>, ApiError> {
    let images = app.use_cases.cats.random_images().await?;
    Ok(Json(images))
}

async fn breeds(State(app): State<Arc<App>>) -> Result<Json<Vec<Breed>>, ApiError> {
    let breeds = app.use_cases.cats.breeds().await?;
    Ok(Json(breeds))
}

async fn cat_images_by_breed(
    State(app): State<Arc<App>>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<ImageRecord>>, ApiError> {
    let params = query_params(params)?;
    let images = app
        .use_cases
        .cats
        .images_by_breed(first_value(&params, "breed_id"))
        .await?;
    Ok(Json(images))
}

// =============================================================================
// Favorites
// =============================================================================

async fn add_favorite(
    State(app): State<Arc<App>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<UpstreamJson, ApiError> {
    let body = body.map_err(ApiError::unreadable_body)?;
    let payload = app.use_cases.favorites.add(body).await?;
    Ok(UpstreamJson(payload))
}

async fn list_favorites(
    State(app): State<Arc<App>>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<UpstreamJson, ApiError> {
    let params = query_params(params)?;
    let payload = app
        .use_cases
        .favorites
        .list(first_value(&params, "sub_id"))
        .await?;
    Ok(UpstreamJson(payload))
}

async fn remove_favorite(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<UpstreamJson, ApiError> {
    let payload = app.use_cases.favorites.remove(id).await?;
    Ok(UpstreamJson(payload))
}

// =============================================================================
// Votes
// =============================================================================

async fn cast_vote(
    State(app): State<Arc<App>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<UpstreamJson, ApiError> {
    let body = body.map_err(ApiError::unreadable_body)?;
    let payload = app.use_cases.votes.cast(body).await?;
    Ok(UpstreamJson(payload))
}

async fn list_votes(
    State(app): State<Arc<App>>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<UpstreamJson, ApiError> {
    let query = VoteQuery::from_pairs(&query_params(params)?);
    let payload = app.use_cases.votes.list(&query).await?;
    Ok(UpstreamJson(payload))
}

// =============================================================================
// Query strings
// =============================================================================

/// Raw query pairs in request order. Repeated keys are kept.
type QueryPairs = Vec<(String, String)>;

/// Unwrap a query extraction, reporting a malformed query as a JSON 400.
fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// First value of `key`; later repeats are ignored.
fn first_value(params: &[(String, String)], key: &str) -> Option<String> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

// =============================================================================
// Responses
// =============================================================================

/// Upstream payload returned to the client untouched, with a JSON content type.
#[derive(Debug)]
pub struct UpstreamJson(pub Bytes);

impl IntoResponse for UpstreamJson {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            self.0,
        )
            .into_response()
    }
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
    GatewayTimeout(String),
}

impl ApiError {
    fn unreadable_body(rejection: BytesRejection) -> Self {
        ApiError::BadRequest(format!("Error reading request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Validation(msg) => ApiError::BadRequest(msg),
            UseCaseError::Dispatch(err) if err.is_deadline_exceeded() => {
                tracing::warn!("Upstream did not answer before the dispatch deadline");
                ApiError::GatewayTimeout(err.to_string())
            }
            other => {
                tracing::error!(error = %other, "Upstream request failed");
                ApiError::Internal(other.to_string())
            }
        }
    }
}
