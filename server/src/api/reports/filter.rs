use super::{summaries, ReportSummaryResponse};
use crate::api::{no_results, ApiError, ErrorResponse, MessageResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use kitem_core::{QueryParams, ReportFilter, ReportRepository};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportFilterResponse {
    pub total_encontradas: usize,
    pub denuncias: Vec<ReportSummaryResponse>,
}

#[utoipa::path(
    get,
    path = "/api/denuncias/filtrar/",
    tag = "denuncias",
    params(
        ("motivo" = Option<String>, Query, description = "Motive code, 1 to 7"),
        ("receita_id" = Option<i32>, Query, description = "Reported recipe"),
        ("usuario_id" = Option<i32>, Query, description = "Reporter"),
        ("data_inicio" = Option<String>, Query, description = "First day, YYYY-MM-DD"),
        ("data_fim" = Option<String>, Query, description = "Last day, YYYY-MM-DD, inclusive"),
        ("search" = Option<String>, Query, description = "Substring of the detail")
    ),
    responses(
        (status = 200, description = "Matching reports", body = ReportFilterResponse),
        (status = 400, description = "Invalid filter value", body = ErrorResponse),
        (status = 404, description = "No report matched", body = MessageResponse)
    )
)]
pub async fn filter_reports(
    State(pool): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let filter = ReportFilter::from_params(&QueryParams::from(params))?;
    let found = PgStore::new(&pool).filter_reports(&filter)?;
    if found.is_empty() {
        return Ok(no_results(
            "Nenhuma denúncia encontrada com os filtros fornecidos.",
        ));
    }

    Ok(Json(ReportFilterResponse {
        total_encontradas: found.len(),
        denuncias: summaries(found),
    })
    .into_response())
}
