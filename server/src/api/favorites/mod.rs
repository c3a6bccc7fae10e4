pub mod create;
pub mod delete;
pub mod detailed;
pub mod filter;
pub mod get;
pub mod list;
pub mod toggle;
pub mod update;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use kitem_core::model::Favorite;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

pub const FAVORITE_NOT_FOUND: &str = "Favorito não encontrado.";

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteResponse {
    pub id: i32,
    pub id_usuario: i32,
    pub id_receita: i32,
    pub data_favorito: DateTime<Utc>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            id_usuario: favorite.user_id,
            id_receita: favorite.recipe_id,
            data_favorito: favorite.created_at,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/favoritos/",
            get(list::list_favorites).post(create::create_favorite),
        )
        .route(
            "/api/favoritos/{id}/",
            get(get::get_favorite)
                .put(update::update_favorite)
                .patch(update::update_favorite)
                .delete(delete::delete_favorite),
        )
        .route(
            "/api/favoritos/toggle/{user_id}/{receita_id}/",
            post(toggle::toggle_favorite),
        )
        .route(
            "/api/favoritos/usuario/{user_id}/filtrar/",
            get(filter::filter_favorites),
        )
        .route(
            "/api/favoritos/usuario/{user_id}/detalhados/",
            get(detailed::detailed_favorites),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_favorites,
        create::create_favorite,
        get::get_favorite,
        update::update_favorite,
        delete::delete_favorite,
        toggle::toggle_favorite,
        filter::filter_favorites,
        detailed::detailed_favorites,
    ),
    components(schemas(
        FavoriteResponse,
        create::CreateFavoriteRequest,
        update::UpdateFavoriteRequest,
        toggle::ToggleFavoriteResponse,
        detailed::FavoriteDetailResponse,
    ))
)]
pub struct ApiDoc;
