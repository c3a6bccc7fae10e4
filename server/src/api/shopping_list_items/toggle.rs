use super::ShoppingListItemResponse;
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use kitem_core::toggle;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct TogglePurchasedResponse {
    pub message: String,
    pub ingrediente: ShoppingListItemResponse,
}

#[utoipa::path(
    patch,
    path = "/api/listas_itens_ingredientes/{id}/toggle-comprado/",
    tag = "listas_itens_ingredientes",
    params(("id" = i32, Path, description = "Shopping list item ID")),
    responses(
        (status = 200, description = "Purchased flag flipped", body = TogglePurchasedResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn toggle_purchased(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TogglePurchasedResponse>, ApiError> {
    let item = toggle::toggle_purchased(&PgStore::new(&pool), id)?;
    Ok(Json(TogglePurchasedResponse {
        message: toggle::purchased_message(&item).to_string(),
        ingrediente: item.into(),
    }))
}
