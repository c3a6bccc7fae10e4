use super::{into_responses, RecipeResponse};
use crate::api::{no_results, ApiError, ErrorResponse, MessageResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use kitem_core::{QueryParams, RecipeFilter, RecipeRepository};

#[utoipa::path(
    get,
    path = "/api/receitas/filtrar/",
    tag = "receitas",
    params(
        ("tipo" = Option<String>, Query, description = "doce or salgado"),
        ("categoria" = Option<String>, Query, description = "Category code"),
        ("restricao_alimentar" = Option<Vec<String>>, Query, description = "Repeatable; any may match"),
        ("dificuldade" = Option<String>, Query, description = "Fácil, Média, Difícil or Master Chef"),
        ("tempo_preparo" = Option<i32>, Query, description = "Minutes; selects the bucket containing it"),
        ("tempo_preparo_operador" = Option<String>, Query, description = "mais or menos"),
        ("ingredientes" = Option<Vec<String>>, Query, description = "Repeatable ingredient names; any may match"),
        ("search" = Option<String>, Query, description = "Substring of the title")
    ),
    responses(
        (status = 200, description = "Matching recipes", body = Vec<RecipeResponse>),
        (status = 400, description = "Invalid filter value", body = ErrorResponse),
        (status = 404, description = "No recipe matched", body = MessageResponse)
    )
)]
pub async fn filter_recipes(
    State(pool): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let filter = RecipeFilter::from_params(&QueryParams::from(params))?;
    tracing::debug!(?filter, "filtering recipes");

    let recipes = PgStore::new(&pool).filter_recipes(&filter)?;
    if recipes.is_empty() {
        return Ok(no_results(
            "Nenhuma receita encontrada com os filtros fornecidos.",
        ));
    }
    Ok(Json(into_responses(recipes)).into_response())
}
