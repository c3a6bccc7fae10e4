use super::ShoppingListResponse;
use crate::api::{ApiError, ErrorResponse};
use crate::models::ShoppingListRow;
use crate::schema::shopping_lists;
use crate::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;
use kitem_core::model::ShoppingList;

#[utoipa::path(
    get,
    path = "/api/listas_itens/",
    tag = "listas_itens",
    responses(
        (status = 200, description = "All shopping lists", body = Vec<ShoppingListResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_shopping_lists(
    State(pool): State<AppState>,
) -> Result<Json<Vec<ShoppingListResponse>>, ApiError> {
    let mut conn = pool.get()?;
    let rows: Vec<ShoppingListRow> = shopping_lists::table
        .select(ShoppingListRow::as_select())
        .order(shopping_lists::id.asc())
        .load(&mut conn)?;
    Ok(Json(
        rows.into_iter()
            .map(|row| ShoppingList::from(row).into())
            .collect(),
    ))
}
