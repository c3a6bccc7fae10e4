use super::{UserResponse, DUPLICATE_USERNAME};
use crate::api::{ApiError, ErrorResponse};
use crate::models::{NewUser, User};
use crate::password::hash_password;
use crate::schema::users;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use kitem_core::validate;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Write-only; stored as an argon2 hash
    pub password: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/usuarios/",
    tag = "usuarios",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid or duplicate username", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(pool): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = validate::USERNAME.check(request.username)?;
    let email = validate::email(request.email)?;
    let password = validate::password(request.password)?;
    let first_name = request.first_name.unwrap_or_default();
    let last_name = request.last_name.unwrap_or_default();

    let password_hash = hash_password(&password)?;

    let mut conn = pool.get()?;
    let user: User = diesel::insert_into(users::table)
        .values(NewUser {
            username: &username,
            email: &email,
            first_name: first_name.trim(),
            last_name: last_name.trim(),
            password_hash: &password_hash,
        })
        .returning(User::as_returning())
        .get_result(&mut conn)
        .map_err(|e| ApiError::from(e).duplicate_as(DUPLICATE_USERNAME))?;

    tracing::info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
