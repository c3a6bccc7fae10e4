pub mod by_recipe;
pub mod by_reporter;
pub mod create;
pub mod delete;
pub mod filter;
pub mod get;
pub mod list;
pub mod statistics;
pub mod toggle_status;
pub mod update;

use crate::api::ApiError;
use crate::AppState;
use axum::routing::{get, patch};
use axum::Router;
use chrono::{DateTime, Utc};
use kitem_core::model::ReportDetails;
use kitem_core::{Choice, ReportReason};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

pub const REPORT_NOT_FOUND: &str = "Denúncia não encontrada.";

/// A report with every stored field and the names shown beside it.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    pub unique_id: Uuid,
    pub id_receita: i32,
    pub motivo_denuncia: i16,
    pub motivo_denuncia_display: String,
    pub detalhamento: Option<String>,
    pub id_denunciante: i32,
    pub denunciante_username: String,
    pub receita_titulo: String,
    pub data_denuncia: DateTime<Utc>,
}

impl From<ReportDetails> for ReportResponse {
    fn from(details: ReportDetails) -> Self {
        let report = details.report;
        Self {
            unique_id: report.unique_id,
            id_receita: report.recipe_id,
            motivo_denuncia: report.reason.number(),
            motivo_denuncia_display: report.reason.label().to_string(),
            detalhamento: report.detail,
            id_denunciante: report.reporter_id,
            denunciante_username: details.reporter_username,
            receita_titulo: details.recipe_title,
            data_denuncia: report.created_at,
        }
    }
}

/// Compact form used by every listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportSummaryResponse {
    pub unique_id: Uuid,
    pub motivo_denuncia: i16,
    pub motivo_denuncia_display: String,
    pub denunciante_username: String,
    pub receita_titulo: String,
    pub data_denuncia: DateTime<Utc>,
}

impl From<ReportDetails> for ReportSummaryResponse {
    fn from(details: ReportDetails) -> Self {
        let report = details.report;
        Self {
            unique_id: report.unique_id,
            motivo_denuncia: report.reason.number(),
            motivo_denuncia_display: report.reason.label().to_string(),
            denunciante_username: details.reporter_username,
            receita_titulo: details.recipe_title,
            data_denuncia: report.created_at,
        }
    }
}

pub fn summaries(reports: Vec<ReportDetails>) -> Vec<ReportSummaryResponse> {
    reports.into_iter().map(Into::into).collect()
}

#[derive(Debug, Clone, Deserialize, ToSchema, Default)]
pub struct ReportRequest {
    pub id_receita: Option<i32>,
    pub id_denunciante: Option<i32>,
    /// Motive code, 1 to 7
    pub motivo_denuncia: Option<i64>,
    pub detalhamento: Option<String>,
}

/// A malformed id cannot name a report, so it is reported as not found.
pub fn parse_unique_id(value: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(value).map_err(|_| ApiError::not_found(REPORT_NOT_FOUND))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MotiveOption {
    pub codigo: i16,
    pub texto: String,
}

pub fn motive_options() -> Vec<MotiveOption> {
    ReportReason::all()
        .iter()
        .map(|reason| MotiveOption {
            codigo: reason.number(),
            texto: reason.label().to_string(),
        })
        .collect()
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/denuncias/",
            get(list::list_reports).post(create::create_report),
        )
        .route(
            "/api/denuncias/lista/",
            get(list::list_reports).post(create::create_report),
        )
        .route("/api/denuncias/filtrar/", get(filter::filter_reports))
        .route(
            "/api/denuncias/estatisticas/",
            get(statistics::report_statistics),
        )
        .route(
            "/api/denuncias/receita/{receita_id}/",
            get(by_recipe::recipe_reports),
        )
        .route(
            "/api/denuncias/usuario/{user_id}/",
            get(by_reporter::reporter_reports),
        )
        .route(
            "/api/denuncias/{unique_id}/",
            get(get::get_report)
                .put(update::update_report)
                .patch(update::update_report)
                .delete(delete::delete_report),
        )
        .route(
            "/api/denuncias/{unique_id}/toggle-status/",
            patch(toggle_status::toggle_report_status),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_reports,
        create::create_report,
        get::get_report,
        update::update_report,
        delete::delete_report,
        by_recipe::recipe_reports,
        by_reporter::reporter_reports,
        filter::filter_reports,
        statistics::report_statistics,
        toggle_status::toggle_report_status,
    ),
    components(schemas(
        ReportResponse,
        ReportSummaryResponse,
        ReportRequest,
        MotiveOption,
        filter::ReportFilterResponse,
        statistics::ReportStatisticsResponse,
        statistics::MotiveCount,
        statistics::RecipeReportCount,
        statistics::ReporterCount,
        toggle_status::ToggleStatusResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use kitem_core::model::Report;

    fn details() -> ReportDetails {
        ReportDetails {
            report: Report {
                unique_id: Uuid::nil(),
                recipe_id: 3,
                reporter_id: 8,
                reason: ReportReason::Spam,
                detail: Some("link suspeito".to_string()),
                created_at: Utc::now(),
            },
            reporter_username: "ana".to_string(),
            recipe_title: "Bolo".to_string(),
        }
    }

    #[test]
    fn test_full_and_summary_forms() {
        let full = serde_json::to_value(ReportResponse::from(details())).unwrap();
        assert_eq!(full["motivo_denuncia"], 2);
        assert_eq!(full["motivo_denuncia_display"], "Spam");
        assert_eq!(full["id_denunciante"], 8);
        assert_eq!(full["detalhamento"], "link suspeito");

        let summary = serde_json::to_value(ReportSummaryResponse::from(details())).unwrap();
        assert_eq!(summary["denunciante_username"], "ana");
        assert_eq!(summary["receita_titulo"], "Bolo");
        assert!(summary.get("detalhamento").is_none());
        assert!(summary.get("id_receita").is_none());
    }

    #[test]
    fn test_malformed_unique_id_is_not_found() {
        assert!(matches!(
            parse_unique_id("42"),
            Err(ApiError::NotFound(message)) if message == REPORT_NOT_FOUND
        ));
        assert_eq!(
            parse_unique_id("00000000-0000-0000-0000-000000000000").unwrap(),
            Uuid::nil()
        );
    }

    #[test]
    fn test_motive_options_cover_every_code() {
        let codes: Vec<i16> = motive_options().iter().map(|m| m.codigo).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
