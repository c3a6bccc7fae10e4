use super::{ShoppingListItemResponse, ITEM_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use kitem_core::ShoppingListRepository;

#[utoipa::path(
    get,
    path = "/api/listas_itens_ingredientes/{id}/",
    tag = "listas_itens_ingredientes",
    params(("id" = i32, Path, description = "Shopping list item ID")),
    responses(
        (status = 200, description = "Shopping list item", body = ShoppingListItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn get_item(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ShoppingListItemResponse>, ApiError> {
    let item = PgStore::new(&pool)
        .find_list_item(id)?
        .ok_or_else(|| ApiError::not_found(ITEM_NOT_FOUND))?;
    Ok(Json(item.into()))
}
