use crate::api::favorites::{FavoriteResponse, FAVORITE_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kitem_core::{FavoriteFilter, FavoriteRepository};

#[utoipa::path(
    get,
    path = "/api/usuarios/{id}/favoritos/",
    tag = "usuarios",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's favorites, newest first", body = Vec<FavoriteResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_user_favorites(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<FavoriteResponse>>, ApiError> {
    let found = PgStore::new(&pool).filter_favorites(&FavoriteFilter::for_user(id))?;
    Ok(Json(
        found
            .into_iter()
            .map(|(favorite, _)| favorite.into())
            .collect(),
    ))
}

/// Removes a favorite by (user, recipe), so a user can only drop their own.
#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}/favoritos/{receita_id}/",
    tag = "usuarios",
    params(
        ("id" = i32, Path, description = "User ID"),
        ("receita_id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 404, description = "The user has not favorited this recipe", body = ErrorResponse)
    )
)]
pub async fn delete_user_favorite(
    State(pool): State<AppState>,
    Path((id, recipe_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    let store = PgStore::new(&pool);
    let favorite = store
        .find_favorite(id, recipe_id)?
        .ok_or_else(|| ApiError::not_found(FAVORITE_NOT_FOUND))?;
    if !store.delete_favorite(favorite.id)? {
        return Err(ApiError::not_found(FAVORITE_NOT_FOUND));
    }
    Ok(StatusCode::NO_CONTENT)
}
