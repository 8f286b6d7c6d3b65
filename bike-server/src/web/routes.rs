//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::domain::InvalidCoordinate;
use crate::nearest::rank_nearest;
use crate::reply::{QueryLocation, format_reply, map_view_url};
use crate::stations::StationError;

use super::dto::*;
use super::state::AppState;
use super::templates::NearbyTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/nearby", get(nearby))
        .route("/reply", post(reply))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Find the stations nearest to a coordinate.
async fn nearby(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<NearbyRequest>,
) -> Result<Response, AppError> {
    let query = req.location();
    query.point.validate()?;

    let limit = state.config.resolve_limit(req.limit);

    // One snapshot for the whole request
    let table = state.stations.load().await?;
    let ranked = rank_nearest(query.point, &table, limit);

    tracing::debug!(point = %query.point, limit, found = ranked.len(), "nearby lookup");

    if accepts_html(&headers) {
        let html = NearbyTemplate::new(&query, &ranked)
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;

        Ok(Html(html).into_response())
    } else {
        let response = NearbyResponse {
            query: QueryResult::from_location(&query),
            stations: ranked.iter().map(StationResult::from_ranked).collect(),
            map_url: map_view_url(query.point),
            text: format_reply(&query, &ranked),
        };

        Ok(Json(response).into_response())
    }
}

/// Build the reply text for a shared location.
async fn reply(State(state): State<AppState>, body: Bytes) -> Result<String, AppError> {
    // Parse JSON manually so we can log the body on failure
    let message: LocationMessage = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, body = %String::from_utf8_lossy(&body), "bad location message");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let query: QueryLocation = message.location();
    query.point.validate()?;

    let table = state.stations.load().await?;
    let ranked = rank_nearest(query.point, &table, state.config.limit);

    Ok(format_reply(&query, &ranked))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<InvalidCoordinate> for AppError {
    fn from(e: InvalidCoordinate) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        AppError::Internal {
            message: format!("failed to load stations: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
