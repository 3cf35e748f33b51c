//! Route definitions for the web front end.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::web::IMAGE_ROOT;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::health_check),
    components(schemas(crate::api::types::HealthResponse)),
    tags(
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Guftagu Web API",
        version = "0.1.0",
        description = "Guftagu Chat web front end",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the router.
///
/// Images are served from `public_dir` under `/images`.
pub fn build_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(handlers::landing_page))
        // Health
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // Static images
        .nest_service(IMAGE_ROOT, ServeDir::new(public_dir))
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
