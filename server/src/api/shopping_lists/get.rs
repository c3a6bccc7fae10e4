use super::{ShoppingListResponse, LIST_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::ShoppingListRow;
use crate::schema::shopping_lists;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::model::ShoppingList;

#[utoipa::path(
    get,
    path = "/api/listas_itens/{id}/",
    tag = "listas_itens",
    params(("id" = i32, Path, description = "Shopping list ID")),
    responses(
        (status = 200, description = "Shopping list", body = ShoppingListResponse),
        (status = 404, description = "Shopping list not found", body = ErrorResponse)
    )
)]
pub async fn get_shopping_list(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ShoppingListResponse>, ApiError> {
    let mut conn = pool.get()?;
    let row = shopping_lists::table
        .find(id)
        .select(ShoppingListRow::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found(LIST_NOT_FOUND))?;
    Ok(Json(ShoppingList::from(row).into()))
}
