use super::ITEM_NOT_FOUND;
use crate::api::{ApiError, ErrorResponse};
use crate::schema::shopping_list_items;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;

#[utoipa::path(
    delete,
    path = "/api/listas_itens_ingredientes/{id}/",
    tag = "listas_itens_ingredientes",
    params(("id" = i32, Path, description = "Shopping list item ID")),
    responses(
        (status = 204, description = "Removed from the list"),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn delete_item(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    let deleted = diesel::delete(shopping_list_items::table.find(id)).execute(&mut conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found(ITEM_NOT_FOUND));
    }
    Ok(StatusCode::NO_CONTENT)
}
