use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use dashboard_engine::bar_chart;
use models::{BalanceRequest, BalanceResult, BarChartConfig, DateRange};
use serde::Serialize;

use crate::{state::SharedState, Result};

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub data: Vec<BalanceResult>,
    pub labels: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthRangeResponse {
    pub data: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub data: BarChartConfig,
    pub success: bool,
}

/// POST /api/dashboard/balance
/// Computes per-month balances, ordered by month index, plus the label list
pub async fn calculate_balance(
    State(state): State<SharedState>,
    payload: std::result::Result<Json<BalanceRequest>, JsonRejection>,
) -> Result<Json<BalanceResponse>> {
    let Json(request) = payload?;
    let entries = request.into_entries();
    let report = state.calculator.calculate(&entries)?;

    tracing::debug!(entries = entries.len(), "balance calculated");

    Ok(Json(BalanceResponse {
        data: report.results,
        labels: report.labels,
        success: true,
    }))
}

/// POST /api/dashboard/months
/// Generates `MM/yyyy` labels for an inclusive date range
pub async fn generate_months(
    State(state): State<SharedState>,
    payload: std::result::Result<Json<DateRange>, JsonRejection>,
) -> Result<Json<MonthRangeResponse>> {
    let Json(range) = payload?;
    let labels = state.months.generate(&range)?;

    tracing::debug!(start = %range.start, end = %range.end, months = labels.len(), "month range generated");

    Ok(Json(MonthRangeResponse {
        data: labels,
        success: true,
    }))
}

/// POST /api/dashboard/chart
/// Same input as the balance endpoint, answered with a ready-to-render bar chart config
pub async fn build_chart(
    State(state): State<SharedState>,
    payload: std::result::Result<Json<BalanceRequest>, JsonRejection>,
) -> Result<Json<ChartResponse>> {
    let Json(request) = payload?;
    let report = state.calculator.calculate(&request.into_entries())?;

    Ok(Json(ChartResponse {
        data: bar_chart(&report),
        success: true,
    }))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "dashboard-api"
    }))
}
