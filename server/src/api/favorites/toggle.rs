use super::FavoriteResponse;
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kitem_core::toggle;
use kitem_core::FavoriteToggle;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ToggleFavoriteResponse {
    pub message: String,
    /// Present when the favorite was added
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorito: Option<FavoriteResponse>,
}

#[utoipa::path(
    post,
    path = "/api/favoritos/toggle/{user_id}/{receita_id}/",
    tag = "favoritos",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("receita_id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 201, description = "Favorite added", body = ToggleFavoriteResponse),
        (status = 200, description = "Favorite removed", body = ToggleFavoriteResponse),
        (status = 400, description = "Unknown user or recipe", body = ErrorResponse)
    )
)]
pub async fn toggle_favorite(
    State(pool): State<AppState>,
    Path((user_id, recipe_id)): Path<(i32, i32)>,
) -> Result<Response, ApiError> {
    let outcome = toggle::toggle_favorite(&PgStore::new(&pool), user_id, recipe_id)?;
    let message = outcome.message().to_string();

    let response = match outcome {
        FavoriteToggle::Added(favorite) => (
            StatusCode::CREATED,
            Json(ToggleFavoriteResponse {
                message,
                favorito: Some(favorite.into()),
            }),
        ),
        FavoriteToggle::Removed => (
            StatusCode::OK,
            Json(ToggleFavoriteResponse {
                message,
                favorito: None,
            }),
        ),
    };
    Ok(response.into_response())
}
