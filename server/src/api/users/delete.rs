use super::USER_NOT_FOUND;
use crate::api::{ApiError, ErrorResponse};
use crate::schema::users;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;

/// Deleting a user removes their recipes, favorites, reports and lists.
#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}/",
    tag = "usuarios",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    let deleted = diesel::delete(users::table.find(id)).execute(&mut conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found(USER_NOT_FOUND));
    }
    tracing::info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
