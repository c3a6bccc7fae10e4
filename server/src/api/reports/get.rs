use super::{parse_unique_id, ReportResponse, REPORT_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use kitem_core::ReportRepository;

#[utoipa::path(
    get,
    path = "/api/denuncias/{unique_id}/",
    tag = "denuncias",
    params(("unique_id" = String, Path, description = "Report UUID")),
    responses(
        (status = 200, description = "Report", body = ReportResponse),
        (status = 404, description = "Report not found", body = ErrorResponse)
    )
)]
pub async fn get_report(
    State(pool): State<AppState>,
    Path(unique_id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    let unique_id = parse_unique_id(&unique_id)?;
    let details = PgStore::new(&pool)
        .find_report(unique_id)?
        .ok_or_else(|| ApiError::not_found(REPORT_NOT_FOUND))?;
    Ok(Json(details.into()))
}
