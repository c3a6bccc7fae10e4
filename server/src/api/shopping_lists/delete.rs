use super::LIST_NOT_FOUND;
use crate::api::{ApiError, ErrorResponse};
use crate::schema::shopping_lists;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;

#[utoipa::path(
    delete,
    path = "/api/listas_itens/{id}/",
    tag = "listas_itens",
    params(("id" = i32, Path, description = "Shopping list ID")),
    responses(
        (status = 204, description = "Shopping list and its items deleted"),
        (status = 404, description = "Shopping list not found", body = ErrorResponse)
    )
)]
pub async fn delete_shopping_list(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    let deleted = diesel::delete(shopping_lists::table.find(id)).execute(&mut conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found(LIST_NOT_FOUND));
    }
    tracing::info!(list_id = id, "shopping list deleted");
    Ok(StatusCode::NO_CONTENT)
}
