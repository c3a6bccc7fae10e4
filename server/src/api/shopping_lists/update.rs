use super::{ShoppingListRequest, ShoppingListResponse, LIST_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::{ShoppingListRow, ShoppingListValues};
use crate::schema::shopping_lists;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::model::ShoppingList;
use kitem_core::validate::{optional_text, LIST_NAME_MAX};

#[utoipa::path(
    put,
    path = "/api/listas_itens/{id}/",
    tag = "listas_itens",
    params(("id" = i32, Path, description = "Shopping list ID")),
    request_body = ShoppingListRequest,
    responses(
        (status = 200, description = "Shopping list updated", body = ShoppingListResponse),
        (status = 400, description = "Invalid field or unknown user", body = ErrorResponse),
        (status = 404, description = "Shopping list not found", body = ErrorResponse)
    )
)]
pub async fn update_shopping_list(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ShoppingListRequest>,
) -> Result<Json<ShoppingListResponse>, ApiError> {
    let mut conn = pool.get()?;
    let current = shopping_lists::table
        .find(id)
        .select(ShoppingListRow::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found(LIST_NOT_FOUND))?;

    // a blank name clears it; an absent one keeps it
    let name = match request.nome {
        Some(name) => optional_text("nome", Some(name), LIST_NAME_MAX)?,
        None => current.name,
    };
    let row = diesel::update(shopping_lists::table.find(id))
        .set(ShoppingListValues {
            user_id: request.id_usuario.unwrap_or(current.user_id),
            name: name.as_deref(),
        })
        .returning(ShoppingListRow::as_returning())
        .get_result(&mut conn)?;
    Ok(Json(ShoppingList::from(row).into()))
}
