use super::FavoriteResponse;
use crate::api::{required, ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use kitem_core::guard;
use kitem_core::model::NewFavorite;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFavoriteRequest {
    pub id_usuario: Option<i32>,
    pub id_receita: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/api/favoritos/",
    tag = "favoritos",
    request_body = CreateFavoriteRequest,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteResponse),
        (status = 400, description = "Missing field, unknown user/recipe or already favorited", body = ErrorResponse)
    )
)]
pub async fn create_favorite(
    State(pool): State<AppState>,
    Json(request): Json<CreateFavoriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new = NewFavorite {
        user_id: required("id_usuario", request.id_usuario)?,
        recipe_id: required("id_receita", request.id_receita)?,
    };
    let favorite = guard::create_favorite(&PgStore::new(&pool), new)?;
    Ok((StatusCode::CREATED, Json(FavoriteResponse::from(favorite))))
}
