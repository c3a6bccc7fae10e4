use super::{motive_options, MotiveOption};
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{extract::State, Json};
use kitem_core::{Choice, ReportFilter, ReportRepository, ReportStatistics};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MotiveCount {
    pub motivo_codigo: i16,
    pub motivo_texto: String,
    pub quantidade: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeReportCount {
    pub id_receita: i32,
    pub titulo: String,
    pub quantidade: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReporterCount {
    pub id_denunciante: i32,
    pub username: String,
    pub quantidade: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportStatisticsResponse {
    pub total_denuncias: usize,
    pub estatisticas_por_motivo: Vec<MotiveCount>,
    pub receitas_mais_denunciadas: Vec<RecipeReportCount>,
    pub usuarios_que_mais_denunciam: Vec<ReporterCount>,
    pub motivos_disponiveis: Vec<MotiveOption>,
}

impl From<ReportStatistics> for ReportStatisticsResponse {
    fn from(stats: ReportStatistics) -> Self {
        Self {
            total_denuncias: stats.total,
            estatisticas_por_motivo: stats
                .by_reason
                .into_iter()
                .map(|(reason, count)| MotiveCount {
                    motivo_codigo: reason.number(),
                    motivo_texto: reason.label().to_string(),
                    quantidade: count,
                })
                .collect(),
            receitas_mais_denunciadas: stats
                .most_reported_recipes
                .into_iter()
                .map(|((id, title), count)| RecipeReportCount {
                    id_receita: id,
                    titulo: title,
                    quantidade: count,
                })
                .collect(),
            usuarios_que_mais_denunciam: stats
                .most_active_reporters
                .into_iter()
                .map(|((id, username), count)| ReporterCount {
                    id_denunciante: id,
                    username,
                    quantidade: count,
                })
                .collect(),
            motivos_disponiveis: motive_options(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/denuncias/estatisticas/",
    tag = "denuncias",
    responses(
        (status = 200, description = "Report counts by motive, recipe and reporter", body = ReportStatisticsResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn report_statistics(
    State(pool): State<AppState>,
) -> Result<Json<ReportStatisticsResponse>, ApiError> {
    let reports = PgStore::new(&pool).filter_reports(&ReportFilter::new())?;
    Ok(Json(ReportStatistics::from_reports(&reports).into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kitem_core::model::{Report, ReportDetails};
    use kitem_core::ReportReason;
    use uuid::Uuid;

    fn report(recipe_id: i32, reporter_id: i32, reason: ReportReason) -> ReportDetails {
        ReportDetails {
            report: Report {
                unique_id: Uuid::new_v4(),
                recipe_id,
                reporter_id,
                reason,
                detail: None,
                created_at: Utc::now(),
            },
            reporter_username: format!("user{reporter_id}"),
            recipe_title: format!("Receita {recipe_id}"),
        }
    }

    #[test]
    fn test_statistics_response_shape() {
        let reports = vec![
            report(1, 10, ReportReason::Spam),
            report(2, 10, ReportReason::Dangerous),
            report(1, 11, ReportReason::Spam),
        ];
        let response = ReportStatisticsResponse::from(ReportStatistics::from_reports(&reports));

        assert_eq!(response.total_denuncias, 3);
        let per_motive: usize = response
            .estatisticas_por_motivo
            .iter()
            .map(|m| m.quantidade)
            .sum();
        assert_eq!(per_motive, 3);
        assert_eq!(response.estatisticas_por_motivo[0].motivo_texto, "Spam");
        assert_eq!(response.receitas_mais_denunciadas[0].id_receita, 1);
        assert_eq!(response.receitas_mais_denunciadas[0].titulo, "Receita 1");
        assert_eq!(response.usuarios_que_mais_denunciam[0].username, "user10");
        assert_eq!(response.motivos_disponiveis.len(), 7);
    }
}
