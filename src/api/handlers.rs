//! HTTP request handlers.

use axum::{
    extract::{OriginalUri, Query, State},
    response::Html,
    Json,
};

use crate::api::types::*;
use crate::db::DatabaseClient;
use crate::error::AppError;
use crate::web::{AuthForm, LandingPage};
use crate::AppState;

/// Landing / sign-in page.
///
/// GET /
pub async fn landing_page(Query(query): Query<LandingQuery>) -> Html<String> {
    let form = AuthForm {
        variant: query.auth_variant(),
        ..AuthForm::default()
    };

    Html(LandingPage::new(form).render_document())
}

/// Health check endpoint.
///
/// Reports whether the shared database handle can actually reach the
/// database, independent of how the startup warm-up went.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // Check database connectivity
    let db_status = match state.db.ping().await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        run_mode: state.run_mode.to_string(),
        database: db_status,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}
