use super::{parse_unique_id, REPORT_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::schema::reports;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;

#[utoipa::path(
    delete,
    path = "/api/denuncias/{unique_id}/",
    tag = "denuncias",
    params(("unique_id" = String, Path, description = "Report UUID")),
    responses(
        (status = 204, description = "Report deleted"),
        (status = 404, description = "Report not found", body = ErrorResponse)
    )
)]
pub async fn delete_report(
    State(pool): State<AppState>,
    Path(unique_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let unique_id = parse_unique_id(&unique_id)?;
    let mut conn = pool.get()?;
    let deleted = diesel::delete(reports::table.filter(reports::unique_id.eq(unique_id)))
        .execute(&mut conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found(REPORT_NOT_FOUND));
    }
    tracing::info!(%unique_id, "report deleted");
    Ok(StatusCode::NO_CONTENT)
}
