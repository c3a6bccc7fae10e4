use crate::api::recipes::format_prep_time;
use crate::api::{no_results, ApiError, ErrorResponse, MessageResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use kitem_core::{Choice, FavoriteFilter, FavoriteRepository};
use serde::Serialize;
use utoipa::ToSchema;

/// A favorite flattened with the recipe fields shown in favorite listings.
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteDetailResponse {
    pub id_favorito: i32,
    pub id_receita: i32,
    pub titulo_receita: String,
    pub dificuldade: String,
    /// HH:MM:SS
    pub tempo_preparo: String,
    pub tipo: Option<String>,
    pub data_favorito: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/favoritos/usuario/{user_id}/detalhados/",
    tag = "favoritos",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Favorites with recipe details, newest first", body = Vec<FavoriteDetailResponse>),
        (status = 404, description = "User has no favorites", body = MessageResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn detailed_favorites(
    State(pool): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Response, ApiError> {
    let found = PgStore::new(&pool).filter_favorites(&FavoriteFilter::for_user(user_id))?;
    if found.is_empty() {
        return Ok(no_results("Nenhum favorito encontrado para este usuário."));
    }

    let details: Vec<FavoriteDetailResponse> = found
        .into_iter()
        .map(|(favorite, recipe)| FavoriteDetailResponse {
            id_favorito: favorite.id,
            id_receita: recipe.id,
            titulo_receita: recipe.title,
            dificuldade: recipe.difficulty.code().to_string(),
            tempo_preparo: format_prep_time(recipe.prep_time),
            tipo: recipe.kind.map(|kind| kind.code().to_string()),
            data_favorito: favorite.created_at,
        })
        .collect();
    Ok(Json(details).into_response())
}
