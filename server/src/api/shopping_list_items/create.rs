use super::{ShoppingListItemRequest, ShoppingListItemResponse};
use crate::api::{required, ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use kitem_core::guard;
use kitem_core::model::NewShoppingListItem;
use kitem_core::validate::{self, UNIT};

#[utoipa::path(
    post,
    path = "/api/listas_itens_ingredientes/",
    tag = "listas_itens_ingredientes",
    request_body = ShoppingListItemRequest,
    responses(
        (status = 201, description = "Ingredient added to the list", body = ShoppingListItemResponse),
        (status = 400, description = "Invalid field, unknown reference or ingredient already in the list", body = ErrorResponse)
    )
)]
pub async fn create_item(
    State(pool): State<AppState>,
    Json(request): Json<ShoppingListItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new = NewShoppingListItem {
        list_id: required("id_lista", request.id_lista)?,
        ingredient_id: required("id_ingrediente", request.id_ingrediente)?,
        quantity: validate::quantity(required("quantidade", request.quantidade)?)?,
        unit: UNIT.check(request.unidade_medida)?,
        price: validate::price(request.preco.flatten())?,
        purchased: request.comprado.unwrap_or(false),
    };
    let created = guard::add_list_item(&PgStore::new(&pool), &new)?;
    Ok((
        StatusCode::CREATED,
        Json(ShoppingListItemResponse::from(created)),
    ))
}
