use super::{ShoppingListItemRequest, ShoppingListItemResponse, ITEM_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::{ShoppingListItemRow, ShoppingListItemValues};
use crate::schema::shopping_list_items;
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::guard::DUPLICATE_LIST_ITEM;
use kitem_core::model::ShoppingListItem;
use kitem_core::validate::{self, UNIT};
use kitem_core::ShoppingListRepository;

#[utoipa::path(
    put,
    path = "/api/listas_itens_ingredientes/{id}/",
    tag = "listas_itens_ingredientes",
    params(("id" = i32, Path, description = "Shopping list item ID")),
    request_body = ShoppingListItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ShoppingListItemResponse),
        (status = 400, description = "Invalid field or duplicate pair", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn update_item(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ShoppingListItemRequest>,
) -> Result<Json<ShoppingListItemResponse>, ApiError> {
    let current = PgStore::new(&pool)
        .find_list_item(id)?
        .ok_or_else(|| ApiError::not_found(ITEM_NOT_FOUND))?;

    let quantity = match request.quantidade {
        Some(quantity) => validate::quantity(quantity)?,
        None => current.quantity,
    };
    let unit = match request.unidade_medida {
        Some(unit) => UNIT.check(Some(unit))?,
        None => current.unit,
    };
    let price = match request.preco {
        Some(price) => validate::price(price)?,
        None => current.price,
    };
    let values = ShoppingListItemValues {
        list_id: request.id_lista.unwrap_or(current.list_id),
        ingredient_id: request.id_ingrediente.unwrap_or(current.ingredient_id),
        quantity,
        unit: &unit,
        price,
        purchased: request.comprado.unwrap_or(current.purchased),
    };

    let mut conn = pool.get()?;
    let row = diesel::update(shopping_list_items::table.find(id))
        .set(&values)
        .returning(ShoppingListItemRow::as_returning())
        .get_result(&mut conn)
        .optional()
        .map_err(|e| ApiError::from(e).duplicate_as(DUPLICATE_LIST_ITEM))?
        .ok_or_else(|| ApiError::not_found(ITEM_NOT_FOUND))?;
    Ok(Json(ShoppingListItem::from(row).into()))
}
