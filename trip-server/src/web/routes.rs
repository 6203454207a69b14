//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tracing::error;

use crate::domain::{InvalidTimestamp, TimePoint};

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/session", get(get_session))
        .route("/pick/departure", post(pick_departure))
        .route("/pick/arrival", post(pick_arrival))
        .route("/refresh", post(refresh))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The trip clock page.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.lock().await;
    let template = IndexTemplate {
        view: SessionView::from_session(&session),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Current session view as JSON.
async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(SessionView::from_session(&session))
}

/// Record a departure pick.
async fn pick_departure(
    State(state): State<AppState>,
    Json(req): Json<PickRequest>,
) -> Result<Json<SessionView>, AppError> {
    let point = TimePoint::from_timestamp_millis(req.timestamp_ms)?;

    let mut session = state.session.lock().await;
    session.selection.pick_departure(point)?;
    Ok(Json(SessionView::from_session(&session)))
}

/// Record an arrival pick.
async fn pick_arrival(
    State(state): State<AppState>,
    Json(req): Json<PickRequest>,
) -> Result<Json<SessionView>, AppError> {
    let point = TimePoint::from_timestamp_millis(req.timestamp_ms)?;

    let mut session = state.session.lock().await;
    session.selection.pick_arrival(point)?;
    Ok(Json(SessionView::from_session(&session)))
}

/// Start a refresh: mark the session refreshing and schedule the
/// deferred reset. A second refresh while one is pending just replaces
/// the pending reset.
async fn refresh(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.refreshing = true;

    let shared = state.session.clone();
    let delay = state.config.delay();
    session.timer.schedule(delay, async move {
        let mut session = shared.lock().await;
        session.selection.reset();
        session.refreshing = false;
    });

    Json(SessionView::from_session(&session))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<InvalidTimestamp> for AppError {
    fn from(e: InvalidTimestamp) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
