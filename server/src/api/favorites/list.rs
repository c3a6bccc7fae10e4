use super::FavoriteResponse;
use crate::api::{ApiError, ErrorResponse};
use crate::models::FavoriteRow;
use crate::schema::favorites;
use crate::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;
use kitem_core::model::Favorite;

#[utoipa::path(
    get,
    path = "/api/favoritos/",
    tag = "favoritos",
    responses(
        (status = 200, description = "All favorites", body = Vec<FavoriteResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_favorites(
    State(pool): State<AppState>,
) -> Result<Json<Vec<FavoriteResponse>>, ApiError> {
    let mut conn = pool.get()?;
    let rows: Vec<FavoriteRow> = favorites::table
        .select(FavoriteRow::as_select())
        .order(favorites::id.asc())
        .load(&mut conn)?;
    Ok(Json(
        rows.into_iter()
            .map(|row| FavoriteResponse::from(Favorite::from(row)))
            .collect(),
    ))
}
