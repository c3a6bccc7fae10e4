use super::{ReportRequest, ReportResponse, REPORT_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use kitem_core::model::NewReport;
use kitem_core::{guard, validate, ReportRepository, ValidationError};

fn required<T>(field: &str, value: Option<T>, message: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(field, message))
}

#[utoipa::path(
    post,
    path = "/api/denuncias/",
    tag = "denuncias",
    request_body = ReportRequest,
    responses(
        (status = 201, description = "Report filed", body = ReportResponse),
        (status = 400, description = "Invalid field, unknown reference or recipe already reported by this user", body = ErrorResponse)
    )
)]
pub async fn create_report(
    State(pool): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe_id = required("id_receita", request.id_receita, "A receita é obrigatória.")?;
    let reason = required(
        "motivo_denuncia",
        request.motivo_denuncia,
        "O motivo da denúncia é obrigatório.",
    )?;
    let reporter_id = required(
        "id_denunciante",
        request.id_denunciante,
        "O denunciante é obrigatório.",
    )?;
    let new = NewReport {
        recipe_id,
        reporter_id,
        reason: validate::report_reason("motivo_denuncia", reason)?,
        detail: validate::report_detail(request.detalhamento)?,
    };

    let store = PgStore::new(&pool);
    let report = guard::create_report(&store, &new)?;
    let details = store
        .find_report(report.unique_id)?
        .ok_or_else(|| ApiError::not_found(REPORT_NOT_FOUND))?;
    Ok((StatusCode::CREATED, Json(ReportResponse::from(details))))
}
