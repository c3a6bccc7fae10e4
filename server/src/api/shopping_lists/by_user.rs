use super::ShoppingListResponse;
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
    path = "/api/listas_itens/usuario/{user_id}/",
    tag = "listas_itens",
    params(("user_id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "The user's shopping lists, possibly empty", body = Vec<ShoppingListResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn user_shopping_lists(
    State(pool): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<ShoppingListResponse>>, ApiError> {
    let lists = PgStore::new(&pool).lists_with_counts(user_id)?;
    Ok(Json(
        lists.into_iter().map(|(list, _)| list.into()).collect(),
    ))
}
