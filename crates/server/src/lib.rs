pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Video Copilot API",
        version = "0.1.0",
        description = "Budget estimation and generation proxy for the B2W video strategy copilot"
    ),
    paths(
        routes::health_check,
        routes::budget::estimate_cost,
        routes::budget::estimate_roi,
        routes::budget::compare,
        routes::budget::recommendations,
        routes::proxy::generate,
    ),
    components(schemas(
        routes::HealthResponse,
        routes::budget::RoiRequest,
        routes::budget::CompareRequest,
        routes::proxy::GenerateRequest,
        error::ErrorResponse,
        copilot_core::ProductionConfig,
        copilot_core::CostBreakdown,
        copilot_core::RoiProjection,
        copilot_core::ComparisonResult,
        copilot_core::UserContext,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "budget", description = "Cost, ROI and option comparison"),
        (name = "proxy", description = "Generation API proxy"),
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    // Fixed CORS header set and its own 204 preflight, outside CorsLayer.
    let proxy_router = Router::new()
        .route(
            "/api/generate",
            post(routes::proxy::generate)
                .options(routes::proxy::preflight)
                .fallback(routes::proxy::method_not_allowed),
        )
        .layer(middleware::map_response(routes::proxy::apply_cors));

    let api_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health_check))
        .route("/api/budget/cost", post(routes::budget::estimate_cost))
        .route("/api/budget/roi", post(routes::budget::estimate_roi))
        .route("/api/budget/compare", post(routes::budget::compare))
        .route(
            "/api/budget/recommendations",
            post(routes::budget::recommendations),
        )
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(api_router)
        .merge(proxy_router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
