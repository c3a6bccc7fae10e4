use super::{summaries, ReportSummaryResponse};
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use kitem_core::{ReportFilter, ReportRepository};

#[utoipa::path(
    get,
    path = "/api/denuncias/usuario/{user_id}/",
    tag = "denuncias",
    params(("user_id" = i32, Path, description = "Reporter ID")),
    responses(
        (status = 200, description = "Reports filed by the user, possibly empty", body = Vec<ReportSummaryResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn reporter_reports(
    State(pool): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<ReportSummaryResponse>>, ApiError> {
    let filter = ReportFilter::new().with_reporter(user_id);
    let reports = PgStore::new(&pool).filter_reports(&filter)?;
    Ok(Json(summaries(reports)))
}
