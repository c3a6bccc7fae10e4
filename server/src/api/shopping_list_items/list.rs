use super::ShoppingListItemResponse;
use crate::api::{ApiError, ErrorResponse};
use crate::models::ShoppingListItemRow;
use crate::schema::shopping_list_items;
use crate::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;
use kitem_core::model::ShoppingListItem;

#[utoipa::path(
    get,
    path = "/api/listas_itens_ingredientes/",
    tag = "listas_itens_ingredientes",
    responses(
        (status = 200, description = "All shopping list items", body = Vec<ShoppingListItemResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_items(
    State(pool): State<AppState>,
) -> Result<Json<Vec<ShoppingListItemResponse>>, ApiError> {
    let mut conn = pool.get()?;
    let rows: Vec<ShoppingListItemRow> = shopping_list_items::table
        .select(ShoppingListItemRow::as_select())
        .order(shopping_list_items::id.asc())
        .load(&mut conn)?;
    Ok(Json(
        rows.into_iter()
            .map(|row| ShoppingListItem::from(row).into())
            .collect(),
    ))
}
