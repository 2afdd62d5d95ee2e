use axum::extract::rejection::JsonRejection;
use axum::Json;
use copilot_core::budget::{
    compare_options, compute_cost, compute_roi, recommend_budget_options, ComparisonResult,
    CostBreakdown, ProductionConfig, RoiProjection,
};
use copilot_core::domain::UserContext;
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::error::{AppError, ErrorResponse};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoiRequest {
    pub config: ProductionConfig,
    #[serde(default)]
    pub context: UserContext,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub options: Vec<ProductionConfig>,
    #[serde(default)]
    pub context: UserContext,
}

#[utoipa::path(
    post,
    path = "/api/budget/cost",
    request_body = ProductionConfig,
    responses(
        (status = 200, description = "Cost breakdown", body = CostBreakdown),
        (status = 400, description = "Invalid production config", body = ErrorResponse)
    ),
    tag = "budget"
)]
pub async fn estimate_cost(
    payload: Result<Json<ProductionConfig>, JsonRejection>,
) -> Result<Json<CostBreakdown>, AppError> {
    let Json(config) = payload?;
    let breakdown = compute_cost(&config);
    debug!(style = %config.style.as_str(), total = breakdown.total_cost, "Cost estimated");
    Ok(Json(breakdown))
}

#[utoipa::path(
    post,
    path = "/api/budget/roi",
    request_body = RoiRequest,
    responses(
        (status = 200, description = "ROI projection", body = RoiProjection),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    ),
    tag = "budget"
)]
pub async fn estimate_roi(
    payload: Result<Json<RoiRequest>, JsonRejection>,
) -> Result<Json<RoiProjection>, AppError> {
    let Json(request) = payload?;
    Ok(Json(compute_roi(&request.config, &request.context)))
}

#[utoipa::path(
    post,
    path = "/api/budget/compare",
    request_body = CompareRequest,
    responses(
        (status = 200, description = "Options ranked best first", body = Vec<ComparisonResult>),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    ),
    tag = "budget"
)]
pub async fn compare(
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<Vec<ComparisonResult>>, AppError> {
    let Json(request) = payload?;
    Ok(Json(compare_options(&request.options, &request.context)))
}

#[utoipa::path(
    post,
    path = "/api/budget/recommendations",
    request_body = UserContext,
    responses(
        (status = 200, description = "Starter options ranked best first", body = Vec<ComparisonResult>),
        (status = 400, description = "Invalid context", body = ErrorResponse)
    ),
    tag = "budget"
)]
pub async fn recommendations(
    payload: Result<Json<UserContext>, JsonRejection>,
) -> Result<Json<Vec<ComparisonResult>>, AppError> {
    let Json(context) = payload?;
    Ok(Json(recommend_budget_options(&context)))
}
