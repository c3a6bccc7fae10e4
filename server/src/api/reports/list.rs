use super::{summaries, ReportSummaryResponse};
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{extract::State, Json};
use kitem_core::{ReportFilter, ReportRepository};

#[utoipa::path(
    get,
    path = "/api/denuncias/",
    tag = "denuncias",
    responses(
        (status = 200, description = "All reports, newest first", body = Vec<ReportSummaryResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_reports(
    State(pool): State<AppState>,
) -> Result<Json<Vec<ReportSummaryResponse>>, ApiError> {
    let reports = PgStore::new(&pool).filter_reports(&ReportFilter::new())?;
    Ok(Json(summaries(reports)))
}
