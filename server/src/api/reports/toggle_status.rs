use super::{parse_unique_id, ReportResponse, REPORT_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use kitem_core::ReportRepository;
use serde::Serialize;
use utoipa::ToSchema;

const NOT_IMPLEMENTED: &str = "Denúncia encontrada. Status toggle será implementado futuramente.";

#[derive(Debug, Serialize, ToSchema)]
pub struct ToggleStatusResponse {
    pub message: String,
    pub denuncia: ReportResponse,
}

/// Reports carry no status yet; this only confirms the report exists.
#[utoipa::path(
    patch,
    path = "/api/denuncias/{unique_id}/toggle-status/",
    tag = "denuncias",
    params(("unique_id" = String, Path, description = "Report UUID")),
    responses(
        (status = 200, description = "Report found, nothing changed", body = ToggleStatusResponse),
        (status = 404, description = "Report not found", body = ErrorResponse)
    )
)]
pub async fn toggle_report_status(
    State(pool): State<AppState>,
    Path(unique_id): Path<String>,
) -> Result<Json<ToggleStatusResponse>, ApiError> {
    let unique_id = parse_unique_id(&unique_id)?;
    let details = PgStore::new(&pool)
        .find_report(unique_id)?
        .ok_or_else(|| ApiError::not_found(REPORT_NOT_FOUND))?;
    Ok(Json(ToggleStatusResponse {
        message: NOT_IMPLEMENTED.to_string(),
        denuncia: details.into(),
    }))
}
