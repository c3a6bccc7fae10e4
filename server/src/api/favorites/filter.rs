use super::FavoriteResponse;
use crate::api::{no_results, ApiError, ErrorResponse, MessageResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use kitem_core::{FavoriteFilter, FavoriteRepository, QueryParams};

#[utoipa::path(
    get,
    path = "/api/favoritos/usuario/{user_id}/filtrar/",
    tag = "favoritos",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("tipo" = Option<String>, Query, description = "doce or salgado"),
        ("dificuldade" = Option<String>, Query, description = "Fácil, Média, Difícil or Master Chef"),
        ("search" = Option<String>, Query, description = "Substring of the recipe title")
    ),
    responses(
        (status = 200, description = "Matching favorites", body = Vec<FavoriteResponse>),
        (status = 400, description = "Invalid filter value", body = ErrorResponse),
        (status = 404, description = "No favorite matched", body = MessageResponse)
    )
)]
pub async fn filter_favorites(
    State(pool): State<AppState>,
    Path(user_id): Path<i32>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let filter = FavoriteFilter::from_params(user_id, &QueryParams::from(params))?;
    let found = PgStore::new(&pool).filter_favorites(&filter)?;
    if found.is_empty() {
        return Ok(no_results(
            "Nenhum favorito encontrado com os filtros fornecidos.",
        ));
    }

    let favorites: Vec<FavoriteResponse> = found
        .into_iter()
        .map(|(favorite, _)| favorite.into())
        .collect();
    Ok(Json(favorites).into_response())
}
