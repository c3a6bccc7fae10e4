use super::UserResponse;
use crate::api::{ApiError, ErrorResponse};
use crate::models::User;
use crate::schema::users;
use crate::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;

#[utoipa::path(
    get,
    path = "/api/usuarios/",
    tag = "usuarios",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_users(State(pool): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let mut conn = pool.get()?;
    let rows: Vec<User> = users::table
        .select(User::as_select())
        .order(users::id.asc())
        .load(&mut conn)?;
    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}
