use super::{parse_unique_id, ReportRequest, ReportResponse, REPORT_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::ReportChanges;
use crate::schema::reports;
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::{validate, ReportRepository};

/// Only the motive and the detail change; recipe, reporter and date are
/// fixed at creation and ignored here.
#[utoipa::path(
    put,
    path = "/api/denuncias/{unique_id}/",
    tag = "denuncias",
    params(("unique_id" = String, Path, description = "Report UUID")),
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Report updated", body = ReportResponse),
        (status = 400, description = "Invalid motive or detail", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse)
    )
)]
pub async fn update_report(
    State(pool): State<AppState>,
    Path(unique_id): Path<String>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, ApiError> {
    let unique_id = parse_unique_id(&unique_id)?;
    let store = PgStore::new(&pool);
    let current = store
        .find_report(unique_id)?
        .ok_or_else(|| ApiError::not_found(REPORT_NOT_FOUND))?
        .report;

    let reason = match request.motivo_denuncia {
        Some(number) => validate::report_reason("motivo_denuncia", number)?,
        None => current.reason,
    };
    let detail = match request.detalhamento {
        Some(detail) => validate::report_detail(Some(detail))?,
        None => current.detail,
    };

    {
        let mut conn = pool.get()?;
        diesel::update(reports::table.filter(reports::unique_id.eq(unique_id)))
            .set(ReportChanges {
                reason: reason.number(),
                detail: detail.as_deref(),
            })
            .execute(&mut conn)?;
    }

    let details = store
        .find_report(unique_id)?
        .ok_or_else(|| ApiError::not_found(REPORT_NOT_FOUND))?;
    Ok(Json(details.into()))
}
