use super::ShoppingListResponse;
use crate::api::{no_results, ApiError, ErrorResponse, MessageResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use kitem_core::{QueryParams, ShoppingListFilter, ShoppingListRepository};

#[utoipa::path(
    get,
    path = "/api/listas_itens/usuario/{user_id}/filtrar/",
    tag = "listas_itens",
    params(
        ("user_id" = i32, Path, description = "Owner ID"),
        ("nome" = Option<String>, Query, description = "Substring of the list name"),
        ("search" = Option<String>, Query, description = "Another name substring; ANDed with nome"),
        ("status" = Option<String>, Query, description = "completa, incompleta or vazia")
    ),
    responses(
        (status = 200, description = "Matching lists", body = Vec<ShoppingListResponse>),
        (status = 400, description = "Invalid status", body = ErrorResponse),
        (status = 404, description = "No list matched", body = MessageResponse)
    )
)]
pub async fn filter_shopping_lists(
    State(pool): State<AppState>,
    Path(user_id): Path<i32>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let filter = ShoppingListFilter::from_params(user_id, &QueryParams::from(params))?;
    let found = PgStore::new(&pool).filter_lists(&filter)?;
    if found.is_empty() {
        return Ok(no_results(
            "Nenhuma lista encontrada com os filtros fornecidos.",
        ));
    }

    let lists: Vec<ShoppingListResponse> =
        found.into_iter().map(|(list, _)| list.into()).collect();
    Ok(Json(lists).into_response())
}
