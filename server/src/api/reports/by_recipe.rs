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
    path = "/api/denuncias/receita/{receita_id}/",
    tag = "denuncias",
    params(("receita_id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Reports against the recipe, possibly empty", body = Vec<ReportSummaryResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn recipe_reports(
    State(pool): State<AppState>,
    Path(receita_id): Path<i32>,
) -> Result<Json<Vec<ReportSummaryResponse>>, ApiError> {
    let filter = ReportFilter::new().with_recipe(receita_id);
    let reports = PgStore::new(&pool).filter_reports(&filter)?;
    Ok(Json(summaries(reports)))
}
