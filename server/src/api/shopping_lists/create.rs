use super::{ShoppingListRequest, ShoppingListResponse};
use crate::api::{required, ApiError, ErrorResponse};
use crate::models::{ShoppingListRow, ShoppingListValues};
use crate::schema::shopping_lists;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use kitem_core::model::ShoppingList;
use kitem_core::validate::{optional_text, LIST_NAME_MAX};

#[utoipa::path(
    post,
    path = "/api/listas_itens/",
    tag = "listas_itens",
    request_body = ShoppingListRequest,
    responses(
        (status = 201, description = "Shopping list created", body = ShoppingListResponse),
        (status = 400, description = "Invalid field or unknown user", body = ErrorResponse)
    )
)]
pub async fn create_shopping_list(
    State(pool): State<AppState>,
    Json(request): Json<ShoppingListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = required("id_usuario", request.id_usuario)?;
    let name = optional_text("nome", request.nome, LIST_NAME_MAX)?;

    let mut conn = pool.get()?;
    let row = diesel::insert_into(shopping_lists::table)
        .values(ShoppingListValues {
            user_id,
            name: name.as_deref(),
        })
        .returning(ShoppingListRow::as_returning())
        .get_result(&mut conn)?;

    tracing::info!(list_id = row.id, user_id, "shopping list created");
    Ok((
        StatusCode::CREATED,
        Json(ShoppingListResponse::from(ShoppingList::from(row))),
    ))
}
